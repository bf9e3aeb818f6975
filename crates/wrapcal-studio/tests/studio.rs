//! End-to-end studio flows over in-memory stores and scripted capabilities.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use wrapcal_store::{MemoryCalendarStore, MemoryStyleStore, MonthSlot, StyleId};
use wrapcal_studio::{CalendarStudio, StudioConfig, StudioError};
use wrapcal_test_utils::{png_uri, twelve_months, RecordingObserver, ScriptedAnalyzer, ScriptedGenerator};

fn studio_with(
    config: StudioConfig,
    analyzer: ScriptedAnalyzer,
    generator: ScriptedGenerator,
) -> CalendarStudio {
    CalendarStudio::new(
        config,
        Arc::new(analyzer),
        Arc::new(generator),
        Arc::new(MemoryStyleStore::new()),
        Arc::new(MemoryCalendarStore::new()),
    )
}

#[tokio::test]
async fn create_and_fetch_base_style() {
    let studio = studio_with(
        StudioConfig::new(),
        ScriptedAnalyzer::replying(vec![]),
        ScriptedGenerator::replying(vec![]),
    );

    let created = studio
        .create_base_style("  retro poster  ", &png_uri(b"style"))
        .await
        .unwrap();
    assert_eq!(created.name, "retro poster");

    let fetched = studio.get_base_style(created.id).await.unwrap();
    assert_eq!(fetched, Some(created.clone()));

    let listed = studio.list_base_styles().await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn blank_style_name_is_rejected() {
    let studio = studio_with(
        StudioConfig::new(),
        ScriptedAnalyzer::replying(vec![]),
        ScriptedGenerator::replying(vec![]),
    );

    let err = studio
        .create_base_style("   ", &png_uri(b"style"))
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::EmptyStyleName));
}

#[tokio::test]
async fn non_image_style_upload_is_rejected() {
    let studio = studio_with(
        StudioConfig::new(),
        ScriptedAnalyzer::replying(vec![]),
        ScriptedGenerator::replying(vec![]),
    );

    let text_uri = wrapcal_image::DataUri::encode(
        b"not an image",
        &wrapcal_image::MediaType::new("text/plain").unwrap(),
    );
    let err = studio
        .create_base_style("retro", &text_uri)
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::InvalidStyleImage(_)));
}

#[tokio::test]
async fn delete_base_style_reports_existence() {
    let studio = studio_with(
        StudioConfig::new(),
        ScriptedAnalyzer::replying(vec![]),
        ScriptedGenerator::replying(vec![]),
    );

    let style = studio
        .create_base_style("retro", &png_uri(b"style"))
        .await
        .unwrap();
    assert!(studio.delete_base_style(style.id).await.unwrap());
    assert!(!studio.delete_base_style(style.id).await.unwrap());
    assert_eq!(studio.get_base_style(style.id).await.unwrap(), None);
}

#[tokio::test]
async fn full_calendar_is_generated_and_persisted() {
    let generated = png_uri(b"month");
    let studio = studio_with(
        StudioConfig::new(),
        ScriptedAnalyzer::always("restyle the scene", 12),
        ScriptedGenerator::always(&generated, 12),
    );

    let style = studio
        .create_base_style("retro", &png_uri(b"style"))
        .await
        .unwrap();
    let observer = RecordingObserver::new();
    let run = studio
        .generate_calendar(style.id, "2026 wrapped", twelve_months(), Some(&observer))
        .await
        .unwrap();

    assert!(run.outcome.is_fully_successful());
    assert_eq!(run.months.len(), 12);
    assert!(run.months.iter().all(MonthSlot::is_generated));
    assert_eq!(run.months[0].name(), "Jan");
    assert_eq!(run.months[11].name(), "Dec");

    // Two snapshots per month.
    assert_eq!(observer.snapshots().len(), 24);

    let saved = run.saved.expect("auto-persistence enabled");
    assert_eq!(saved.style_id, style.id);
    assert_eq!(saved.title, "2026 wrapped");
    assert_eq!(saved.months, run.months);

    let fetched = studio.get_calendar(saved.id).await.unwrap();
    assert_eq!(fetched, Some(saved.clone()));
    assert_eq!(studio.list_calendars().await.unwrap(), vec![saved]);
}

#[tokio::test]
async fn failed_month_is_isolated_and_persisted_as_failed() {
    use wrapcal_provider::AnalysisError;

    let generated = png_uri(b"month");
    let mut script: Vec<Result<&str, AnalysisError>> = vec![Ok("restyle"); 12];
    script[3] = Err(AnalysisError::Unreachable("timeout".to_string()));
    // Eleven generations: the failed month never reaches the generator.
    let studio = studio_with(
        StudioConfig::new(),
        ScriptedAnalyzer::replying(script),
        ScriptedGenerator::always(&generated, 11),
    );

    let style = studio
        .create_base_style("retro", &png_uri(b"style"))
        .await
        .unwrap();
    let run = studio
        .generate_calendar(style.id, "2026 wrapped", twelve_months(), None)
        .await
        .unwrap();

    assert_eq!(run.outcome.succeeded(), 11);
    assert_eq!(run.outcome.failed(), 1);
    match &run.months[3] {
        MonthSlot::Failed { name, message } => {
            assert_eq!(name, "Apr");
            assert!(message.contains("timeout"));
        }
        MonthSlot::Generated { .. } => panic!("month 3 should have failed"),
    }
    assert!(run.months[4].is_generated());

    // Failed months are persisted too.
    let saved = run.saved.expect("auto-persistence enabled");
    assert_eq!(saved.months[3], run.months[3]);
}

#[tokio::test]
async fn wrong_month_count_is_rejected_before_any_work() {
    let studio = studio_with(
        StudioConfig::new(),
        ScriptedAnalyzer::replying(vec![]),
        ScriptedGenerator::replying(vec![]),
    );

    let style = studio
        .create_base_style("retro", &png_uri(b"style"))
        .await
        .unwrap();
    let mut months = twelve_months();
    months.truncate(3);
    let err = studio
        .generate_calendar(style.id, "short", months, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StudioError::WrongMonthCount {
            expected: 12,
            found: 3
        }
    ));
}

#[tokio::test]
async fn unknown_style_is_rejected() {
    let studio = studio_with(
        StudioConfig::new(),
        ScriptedAnalyzer::replying(vec![]),
        ScriptedGenerator::replying(vec![]),
    );

    let missing = StyleId::new();
    let err = studio
        .generate_calendar(missing, "no style", twelve_months(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::StyleNotFound(id) if id == missing));
}

#[tokio::test]
async fn persistence_can_be_disabled() {
    let generated = png_uri(b"month");
    let studio = studio_with(
        StudioConfig::new()
            .with_months_per_calendar(2)
            .without_persistence(),
        ScriptedAnalyzer::always("restyle", 2),
        ScriptedGenerator::always(&generated, 2),
    );

    let style = studio
        .create_base_style("retro", &png_uri(b"style"))
        .await
        .unwrap();
    let mut months = twelve_months();
    months.truncate(2);
    let run = studio
        .generate_calendar(style.id, "preview", months, None)
        .await
        .unwrap();

    assert!(run.saved.is_none());
    assert!(run.outcome.is_fully_successful());
    assert!(studio.list_calendars().await.unwrap().is_empty());
}
