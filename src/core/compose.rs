//! # Row Composition
//!
//! Turns the listing into one padded text row per entry, tagged with what the
//! terminal layer needs to style it. Colors themselves live in `tui::Theme`.

use unicode_width::UnicodeWidthStr;

use crate::core::entry::Entry;

const SYNTHETIC_SPACER: &str = " ";
const CHILD_SPACER: &str = "   ";
const FOOTER_LABEL: &str = "command";

/// A composed line of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Spacer + name, padded with spaces to the viewport width.
    pub text: String,
    pub is_dir: bool,
    pub selected: bool,
}

pub fn compose_rows(entries: &[Entry], cursor: usize, width: u16) -> Vec<Row> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let spacer = if index == 0 { SYNTHETIC_SPACER } else { CHILD_SPACER };
            let mut text = format!("{spacer}{}", entry.display_name());
            // Pad so the highlight background spans the whole row
            let padding = (width as usize).saturating_sub(text.width());
            text.extend(std::iter::repeat_n(' ', padding));
            Row {
                text,
                is_dir: entry.is_dir,
                selected: index == cursor,
            }
        })
        .collect()
}

/// Footer text: the label followed by whatever command mode has captured.
pub fn command_line_text(buffer: &str) -> String {
    format!("{FOOTER_LABEL}{buffer}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry { name: "/a".into(), is_dir: true },
            Entry { name: "b".into(), is_dir: true },
            Entry { name: "c".into(), is_dir: false },
        ]
    }

    #[test]
    fn test_spacers_and_padding() {
        let rows = compose_rows(&sample(), 0, 8);
        assert_eq!(rows[0].text, " /a     ");
        assert_eq!(rows[1].text, "   b    ");
        assert_eq!(rows[2].text, "   c    ");
    }

    #[test]
    fn test_flags() {
        let rows = compose_rows(&sample(), 2, 8);
        assert!(rows[0].is_dir && !rows[0].selected);
        assert!(rows[1].is_dir && !rows[1].selected);
        assert!(!rows[2].is_dir && rows[2].selected);
    }

    #[test]
    fn test_long_name_not_truncated() {
        let entries = vec![Entry { name: "/a/very/long/path".into(), is_dir: true }];
        let rows = compose_rows(&entries, 0, 4);
        assert_eq!(rows[0].text, " /a/very/long/path");
    }

    #[test]
    fn test_wide_characters_pad_by_display_width() {
        let entries = vec![
            Entry { name: "/".into(), is_dir: true },
            Entry { name: "日本".into(), is_dir: false },
        ];
        let rows = compose_rows(&entries, 0, 10);
        assert_eq!(rows[1].text.width(), 10);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_displayed_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let entries = vec![
            Entry { name: "/".into(), is_dir: true },
            Entry { name: OsStr::from_bytes(b"bad\xffname").to_os_string(), is_dir: true },
        ];
        let rows = compose_rows(&entries, 0, 0);
        assert_eq!(rows[1].text, "   bad\u{FFFD}name");
    }

    #[test]
    fn test_command_line_text() {
        assert_eq!(command_line_text(""), "command");
        assert_eq!(command_line_text(":wq"), "command:wq");
    }
}
