use std::fs;
use std::path::PathBuf;

use video_links_extractor::platform::{Clipboard, CommandShare, LinkOpener, ShareRoute, ShareTarget};
use video_links_extractor::session::{
    MSG_EMPTY_INPUT, MSG_EXTRACT_FIRST, MSG_NO_VIDEOS, MSG_SHARED_TO_CLIPBOARD, MSG_UNSUPPORTED_FORMAT,
    MSG_URLS_COPIED,
};
use video_links_extractor::{Error, Handoff, Notice, NoticeKind, Options, Result, Session};

const PAGE: &str = r#"
    <html><body>
        <div data-vid="a1" data-nname="Math" data-vit="2"></div>
        <div data-vid="b2" data-nname="Sci" data-vit="1"></div>
    </body></html>
"#;

const URLS: &str = "https://www.youtube.com/watch?v=b2\nhttps://www.youtube.com/watch?v=a1";
const LABELED: &str =
    "1. Sci: https://www.youtube.com/watch?v=b2\n2. Math: https://www.youtube.com/watch?v=a1";

#[derive(Default)]
struct RecordingClipboard {
    writes: Vec<String>,
    fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Clipboard("permission denied".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingOpener {
    opened: Vec<String>,
    refuse: Option<String>,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        if self.refuse.as_deref() == Some(url) {
            return Err(Error::Open {
                url: url.to_string(),
                reason: "blocked".to_string(),
            });
        }
        self.opened.push(url.to_string());
        Ok(())
    }
}

struct RecordingShare {
    available: bool,
    fail: bool,
    shared: Vec<(String, String)>,
}

impl RecordingShare {
    fn new(available: bool, fail: bool) -> Self {
        Self {
            available,
            fail,
            shared: Vec::new(),
        }
    }
}

impl ShareTarget for RecordingShare {
    fn is_available(&self) -> bool {
        self.available
    }

    fn route(&self) -> ShareRoute {
        ShareRoute::Native
    }

    fn share(&mut self, title: &str, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Share("AbortError".to_string()));
        }
        self.shared.push((title.to_string(), text.to_string()));
        Ok(())
    }
}

fn loaded() -> Session {
    let mut session = Session::new(Options::default());
    let notice = session.extract(PAGE);
    assert_eq!(notice.kind, NoticeKind::Info);
    session
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vle-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn empty_input_and_no_matches_give_distinct_notices() {
    let mut session = Session::new(Options::default());

    assert_eq!(session.extract(""), Notice::error(MSG_EMPTY_INPUT));
    assert_eq!(session.extract("<p>plain</p>"), Notice::error(MSG_NO_VIDEOS));
    assert_ne!(MSG_EMPTY_INPUT, MSG_NO_VIDEOS);
}

#[test]
fn handoff_page_is_extracted_on_initialize() {
    let session = Session::initialize(Options::default(), Handoff::captured(PAGE));

    assert!(session.results_visible());
    assert_eq!(session.render_text(), format!("{LABELED}\n"));
}

#[test]
fn render_html_lists_entries_in_order() {
    let session = loaded();
    let html = session.render_html();

    let sci = html.find("1. Sci: ").expect("Sci entry");
    let math = html.find("2. Math: ").expect("Math entry");
    assert!(sci < math);
    assert!(html.contains(r#"<a href="https://www.youtube.com/watch?v=b2" target="_blank">"#));
}

#[test]
fn open_all_opens_in_list_order() {
    let mut session = loaded();
    let mut opener = RecordingOpener::default();

    let notice = session.open_all(&mut opener);
    assert_eq!(opener.opened.join("\n"), URLS);
    assert_eq!(notice, Notice::info("Opened 2 of 2 video links."));
}

#[test]
fn open_all_continues_after_a_failure() {
    let mut session = loaded();
    let mut opener = RecordingOpener {
        refuse: Some("https://www.youtube.com/watch?v=b2".to_string()),
        ..RecordingOpener::default()
    };

    let notice = session.open_all(&mut opener);
    assert_eq!(opener.opened, vec!["https://www.youtube.com/watch?v=a1".to_string()]);
    assert_eq!(notice, Notice::info("Opened 1 of 2 video links."));
}

#[test]
fn copy_puts_only_urls_on_clipboard() {
    let mut session = loaded();
    let mut clipboard = RecordingClipboard::default();

    let notice = session.copy(&mut clipboard);
    assert_eq!(clipboard.writes, vec![URLS.to_string()]);
    assert_eq!(notice, Some(Notice::info(MSG_URLS_COPIED)));
}

#[test]
fn copy_failure_is_not_fatal() {
    let mut session = loaded();
    let mut clipboard = RecordingClipboard {
        fail: true,
        ..RecordingClipboard::default()
    };

    assert!(session.copy(&mut clipboard).is_none());
    assert_eq!(session.videos().len(), 2);

    let mut working = RecordingClipboard::default();
    assert_eq!(session.copy(&mut working), Some(Notice::info(MSG_URLS_COPIED)));
}

#[test]
fn share_uses_native_target_when_available() {
    let mut session = loaded();
    let mut native = RecordingShare::new(true, false);
    let mut clipboard = RecordingClipboard::default();

    let notice = session.share(&mut native, &mut clipboard);
    assert!(notice.is_none());
    assert_eq!(native.shared, vec![("Video Links".to_string(), LABELED.to_string())]);
    assert!(clipboard.writes.is_empty());
}

#[test]
fn share_falls_back_to_clipboard() {
    let mut session = loaded();
    let mut native = CommandShare::new(None);
    let mut clipboard = RecordingClipboard::default();

    let notice = session.share(&mut native, &mut clipboard);
    assert_eq!(notice, Some(Notice::info(MSG_SHARED_TO_CLIPBOARD)));
    assert_eq!(clipboard.writes, vec![LABELED.to_string()]);
}

#[test]
fn share_failure_is_silent() {
    let mut session = loaded();
    let mut native = RecordingShare::new(true, true);
    let mut clipboard = RecordingClipboard::default();

    assert!(session.share(&mut native, &mut clipboard).is_none());
    assert!(clipboard.writes.is_empty());
}

#[test]
fn share_appends_configured_note() {
    let options = Options {
        appended_note: Some("Booklet: chapter 4".to_string()),
        ..Options::default()
    };
    let mut session = Session::initialize(options, Handoff::captured(PAGE));
    let mut native = RecordingShare::new(false, false);
    let mut clipboard = RecordingClipboard::default();

    session.share(&mut native, &mut clipboard);
    assert_eq!(clipboard.writes, vec![format!("{LABELED}\n\nBooklet: chapter 4")]);
}

#[test]
fn export_text_writes_labeled_block() {
    let dir = scratch_dir("session-text");
    let mut session = loaded();

    let notice = session.export(Some("TEXT"), &dir).expect("notice");
    assert!(!notice.is_error());
    assert_eq!(
        fs::read_to_string(dir.join("video_links.txt")).expect("text export"),
        LABELED
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn export_pdf_writes_document() {
    let dir = scratch_dir("session-pdf");
    let mut session = loaded();

    let notice = session.export(Some("Pdf"), &dir).expect("notice");
    assert!(!notice.is_error());
    let bytes = fs::read(dir.join("video_links.pdf")).expect("pdf export");
    assert!(bytes.starts_with(b"%PDF-"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn export_unsupported_format_writes_nothing() {
    let dir = scratch_dir("session-unsupported");
    let mut session = loaded();

    for answer in ["docx", "txt", ""] {
        let notice = session.export(Some(answer), &dir);
        assert_eq!(notice, Some(Notice::error(MSG_UNSUPPORTED_FORMAT)));
    }
    assert_eq!(fs::read_dir(&dir).expect("scratch dir").count(), 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn export_to_missing_dir_reports_error() {
    let mut session = loaded();
    let missing = std::env::temp_dir().join("vle-missing-dir").join("nested");

    let notice = session.export(Some("text"), &missing).expect("notice");
    assert!(notice.is_error());
    assert!(notice.text.starts_with("Export failed:"));
}

#[test]
fn actions_before_extraction_ask_for_input() {
    let mut session = Session::new(Options::default());
    let mut clipboard = RecordingClipboard::default();
    let mut opener = RecordingOpener::default();

    assert_eq!(session.copy(&mut clipboard), Some(Notice::error(MSG_EXTRACT_FIRST)));
    assert_eq!(session.open_all(&mut opener), Notice::error(MSG_EXTRACT_FIRST));
    assert!(clipboard.writes.is_empty());
    assert!(opener.opened.is_empty());
}

#[test]
fn export_before_extraction_writes_no_file() {
    let dir = scratch_dir("export-first");
    let mut session = Session::new(Options::default());

    assert_eq!(
        session.export(Some("text"), &dir),
        Some(Notice::error(MSG_EXTRACT_FIRST))
    );
    assert_eq!(
        session.export(Some("docx"), &dir),
        Some(Notice::error(MSG_EXTRACT_FIRST))
    );
    assert!(!dir.join("video_links.txt").exists());
    let _ = fs::remove_dir_all(&dir);
}
