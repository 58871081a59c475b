use std::io::Write;

use blinkread::engine::layout::FormattedUnit;
use blinkread::engine::renderer::{Renderer, RendererError};
use blinkread::engine::token::DisplayUnit;
use blinkread::engine::{tokenize, CancelToken, PlayOutcome, Session, SessionParams};
use blinkread::input::InputSource;
use blinkread::settings::{Settings, SettingsProvider};
use blinkread::ui::theme::ThemeKind;

#[derive(Default)]
struct RecordingRenderer {
    shown: Vec<FormattedUnit>,
    viewport: Option<(u32, u32)>,
    resets: usize,
}

impl Renderer for RecordingRenderer {
    fn set_viewport(&mut self, width_px: u32, height_px: u32) -> Result<(), RendererError> {
        self.viewport = Some((width_px, height_px));
        Ok(())
    }

    fn show(&mut self, unit: &FormattedUnit, _duration_ms: u64) -> Result<(), RendererError> {
        self.shown.push(unit.clone());
        Ok(())
    }

    fn reset_viewport(&mut self) -> Result<(), RendererError> {
        self.resets += 1;
        Ok(())
    }
}

fn fast_params() -> SessionParams {
    SessionParams::new(60_000).unwrap().with_warm_up(0)
}

#[test]
fn end_to_end_file_playback() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Hello, world! Next\n\nPara.").unwrap();

    let arg = file.path().to_str().unwrap().to_string();
    let text = InputSource::resolve(&arg).load().expect("file should load");

    let units = tokenize(&text);
    assert_eq!(
        units,
        vec![
            DisplayUnit::word("Hello,"),
            DisplayUnit::Pause,
            DisplayUnit::word("world!"),
            DisplayUnit::Pause,
            DisplayUnit::word("Next"),
            DisplayUnit::Pause,
            DisplayUnit::Pause,
            DisplayUnit::word("Para."),
            DisplayUnit::Pause,
        ]
    );

    let session = Session::new(&text, fast_params()).unwrap();
    let mut renderer = RecordingRenderer::default();
    let outcome = session.play(&mut renderer, &CancelToken::new()).unwrap();
    assert_eq!(outcome, PlayOutcome::Completed);

    let words: Vec<String> = renderer.shown.iter().map(FormattedUnit::text).collect();
    assert_eq!(
        words,
        vec![
            "[START]", "Hello,", "Hello,", "world!", "world!", "Next", "Next", "Next", "Para.",
            "Para.", "[END]",
        ]
    );

    // "Hello," and "world!" are the longest words at 6 graphemes
    assert_eq!(renderer.viewport, Some(((6 + 4) * 36, 150)));
    assert_eq!(renderer.resets, 1);
}

#[test]
fn stream_words_share_width_and_focus_column() {
    let session = Session::new(
        "An uneven mixture, of extraordinarily different word lengths!",
        fast_params(),
    )
    .unwrap();
    let mut renderer = RecordingRenderer::default();
    session.play(&mut renderer, &CancelToken::new()).unwrap();

    // Skip the synthetic markers; they may exceed the stream width
    let stream_units: Vec<&FormattedUnit> = renderer
        .shown
        .iter()
        .filter(|u| {
            let text = u.text();
            text != "[START]" && text != "[END]"
        })
        .collect();
    assert!(!stream_units.is_empty());

    let width = stream_units[0].width();
    let column = stream_units[0].focus_column();
    for unit in &stream_units {
        assert_eq!(unit.width(), width, "width varied for {:?}", unit.text());
        assert_eq!(
            unit.focus_column(),
            column,
            "focus drifted for {:?}",
            unit.text()
        );
    }
}

#[test]
fn wpm_flows_from_settings_file_to_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    Settings {
        wpm: Some(400),
        theme: Some(ThemeKind::Dark),
    }
    .store(&path)
    .unwrap();

    let stored = Settings::load(&path);
    let wpm = stored.wpm().unwrap_or(300);
    assert_eq!(wpm, 400);

    let params = SessionParams::new(wpm).unwrap();
    assert_eq!(params.millis_per_unit(), 150);
}

#[test]
fn empty_file_is_rejected_before_the_engine_runs() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let arg = file.path().to_str().unwrap().to_string();
    assert!(InputSource::resolve(&arg).load().is_err());
}

#[test]
fn pause_only_text_fails_with_empty_content() {
    let result = Session::new("\n\n\n", fast_params());
    assert!(result.is_err());
}
