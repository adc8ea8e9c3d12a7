use std::time::Duration;

use commentcloud_core::WordEntry;

const BAR_WIDTH: usize = 30;

pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), (secs % 60.0).floor())
    }
}

/// Scale `value` against the largest count to a bar of at most
/// `BAR_WIDTH` cells. Every counted word gets at least one cell.
fn bar_len(value: u32, max: u32) -> usize {
    if max == 0 {
        return 0;
    }
    let scaled = (value as usize * BAR_WIDTH).div_ceil(max as usize);
    scaled.clamp(1, BAR_WIDTH)
}

/// Format ranked words as an aligned table with a bar per word
pub fn format_words_readable(words: &[WordEntry]) -> String {
    let Some(max) = words.iter().map(|w| w.value).max() else {
        return "No words to show.\n".to_string();
    };
    let text_width = words.iter().map(|w| w.text.len()).max().unwrap_or(0);
    let value_width = max.to_string().len();

    let mut output = String::new();
    for (i, word) in words.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. {:<text_width$}  {:>value_width$}  {}\n",
            i + 1,
            word.text,
            word.value,
            "█".repeat(bar_len(word.value, max)),
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, value: u32) -> WordEntry {
        WordEntry {
            text: text.to_string(),
            value,
        }
    }

    #[test]
    fn formats_short_and_long_durations() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_millis(119_600)), "1m 59s");
    }

    #[test]
    fn bars_scale_to_the_top_word() {
        assert_eq!(bar_len(10, 10), BAR_WIDTH);
        assert_eq!(bar_len(5, 10), BAR_WIDTH / 2);
        assert_eq!(bar_len(1, 1000), 1);
        assert_eq!(bar_len(0, 0), 0);
    }

    #[test]
    fn aligns_columns() {
        let table = format_words_readable(&[entry("great", 12), entry("video", 3)]);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. great  12  "));
        assert!(lines[1].starts_with("  2. video   3  "));
    }

    #[test]
    fn empty_list_has_a_message() {
        assert_eq!(format_words_readable(&[]), "No words to show.\n");
    }
}
