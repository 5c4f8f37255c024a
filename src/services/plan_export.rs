use std::{
    io,
    path::{Path, PathBuf},
};

use crate::models::trip::TripRequest;

pub const SHARE_TITLE: &str = "My Travel Plan";

/// Country names are free text; anything a file name cannot hold, path
/// separators included, becomes `-`.
fn file_component(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}

pub fn download_filename(trip: &TripRequest) -> String {
    format!(
        "travel-plan-{}-to-{}.txt",
        file_component(&trip.start_country),
        file_component(&trip.end_country)
    )
}

/// Write the raw plan text into `dir` under its download name.
pub async fn export_plan(dir: &Path, trip: &TripRequest, text: &str) -> io::Result<PathBuf> {
    let path = dir.join(download_filename(trip));
    tokio::fs::write(&path, text).await?;
    log::info!("Exported travel plan to {}", path.display());
    Ok(path)
}

/// Platform share sheet.
pub trait ShareTarget {
    fn share(&self, title: &str, text: &str) -> io::Result<()>;
}

pub trait Clipboard {
    fn copy(&self, text: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

/// Share through the platform when it offers a share target, otherwise copy
/// the plan to the clipboard.
pub fn share_plan(
    share: Option<&dyn ShareTarget>,
    clipboard: &dyn Clipboard,
    text: &str,
) -> io::Result<ShareOutcome> {
    match share {
        Some(target) => {
            target.share(SHARE_TITLE, text)?;
            Ok(ShareOutcome::Shared)
        }
        None => {
            clipboard.copy(text)?;
            Ok(ShareOutcome::Copied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(String, String)>>,
    }

    impl ShareTarget for Recorder {
        fn share(&self, title: &str, text: &str) -> io::Result<()> {
            self.calls.borrow_mut().push((title.to_string(), text.to_string()));
            Ok(())
        }
    }

    impl Clipboard for Recorder {
        fn copy(&self, text: &str) -> io::Result<()> {
            self.calls.borrow_mut().push(("clipboard".to_string(), text.to_string()));
            Ok(())
        }
    }

    fn trip() -> TripRequest {
        TripRequest {
            start_country: "Australia".to_string(),
            end_country: "Japan".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn filename_uses_both_countries() {
        assert_eq!(download_filename(&trip()), "travel-plan-Australia-to-Japan.txt");
    }

    #[test]
    fn export_writes_text_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let text = "# Plan\n\n- Day 1: Sydney\r\n";

        let path = tokio_test::block_on(export_plan(dir.path(), &trip(), text)).unwrap();

        assert_eq!(path.file_name().unwrap(), "travel-plan-Australia-to-Japan.txt");
        assert_eq!(std::fs::read_to_string(path).unwrap(), text);
    }

    #[test]
    fn export_keeps_separators_out_of_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let trip = TripRequest {
            start_country: "UK/Ireland".to_string(),
            end_country: "../../France".to_string(),
            ..Default::default()
        };

        let path = tokio_test::block_on(export_plan(dir.path(), &trip, "# Plan")).unwrap();

        assert_eq!(path.parent().unwrap(), dir.path());
        assert_eq!(
            path.file_name().unwrap(),
            "travel-plan-UK-Ireland-to-..-..-France.txt"
        );
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# Plan");
    }

    #[test]
    fn share_prefers_platform_target() {
        let share = Recorder::default();
        let clipboard = Recorder::default();

        let outcome = share_plan(Some(&share as &dyn ShareTarget), &clipboard, "plan text").unwrap();

        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(
            share.calls.borrow().as_slice(),
            &[("My Travel Plan".to_string(), "plan text".to_string())]
        );
        assert!(clipboard.calls.borrow().is_empty());
    }

    #[test]
    fn share_falls_back_to_clipboard() {
        let clipboard = Recorder::default();

        let outcome = share_plan(None, &clipboard, "plan text").unwrap();

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(clipboard.calls.borrow()[0].1, "plan text");
    }
}
