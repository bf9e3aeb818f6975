//! Single-item pipeline
//!
//! Drives one month's scene through the two external capabilities: analyze
//! the scene into an editing instruction, then generate the edited image
//! from the shared style reference. Exactly one call to each capability per
//! invocation; retry policy, if any, belongs to the caller.

use crate::error::ItemError;
use crate::types::{MonthInput, PipelineResult, SceneContent};
use wrapcal_image::DataUri;
use wrapcal_provider::{
    AnalysisError, AnalysisRequest, GenerationError, GenerationRequest, ImageGenerator,
    SceneAnalyzer,
};

/// Run one scene through analyze → generate
///
/// No state is retained between invocations; the only side effects are the
/// two capability calls.
pub async fn run_scene_pipeline(
    input: &MonthInput,
    base_style: &DataUri,
    analyzer: &dyn SceneAnalyzer,
    generator: &dyn ImageGenerator,
) -> Result<PipelineResult, ItemError> {
    let request = analysis_request_for(input)?;

    let reply = analyzer.analyze(request).await?;
    let instruction = reply.instruction.trim().to_string();
    if instruction.is_empty() {
        return Err(ItemError::Analysis(AnalysisError::NoInstruction));
    }
    tracing::debug!(month = %input.name, instruction = %instruction, "scene analyzed");

    let generated = generator
        .generate(GenerationRequest {
            base_image: base_style.clone(),
            instruction: instruction.clone(),
        })
        .await?;
    if generated.image.is_empty() {
        return Err(ItemError::Generation(GenerationError::NoImage));
    }

    Ok(PipelineResult {
        instruction,
        image: generated.image,
    })
}

/// Build the analysis request for a month's content
///
/// Image payloads are decode-checked first so a malformed upload surfaces as
/// an analysis-stage failure without a wasted capability call.
fn analysis_request_for(input: &MonthInput) -> Result<AnalysisRequest, ItemError> {
    match &input.content {
        SceneContent::Image(image) => {
            image.decode().map_err(AnalysisError::InvalidImage)?;
            Ok(AnalysisRequest::image(image.as_str()))
        }
        SceneContent::Text(description) => {
            let trimmed = description.trim();
            if trimmed.is_empty() {
                return Err(ItemError::Validation(format!(
                    "month '{}' has no content",
                    input.name
                )));
            }
            Ok(AnalysisRequest::text(trimmed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{png_uri, ScriptedAnalyzer, ScriptedGenerator};
    use wrapcal_image::DataUriError;
    use wrapcal_provider::SceneKind;

    fn style() -> DataUri {
        png_uri(b"style")
    }

    #[tokio::test]
    async fn text_scene_runs_both_stages() {
        let analyzer = ScriptedAnalyzer::replying(vec![Ok("add falling snow")]);
        let generator = ScriptedGenerator::replying(vec![Ok(png_uri(b"edited"))]);

        let input = MonthInput::text("Jan", "  a snowy cabin  ");
        let result = run_scene_pipeline(&input, &style(), &analyzer, &generator)
            .await
            .unwrap();

        assert_eq!(result.instruction, "add falling snow");
        assert_eq!(result.image, png_uri(b"edited"));

        // Text is trimmed before it reaches the analyzer
        let calls = analyzer.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].kind, SceneKind::Text);
        assert_eq!(calls[0].payload, "a snowy cabin");
    }

    #[tokio::test]
    async fn image_scene_passes_encoded_payload() {
        let scene = png_uri(b"scene");
        let analyzer = ScriptedAnalyzer::replying(vec![Ok("match the style")]);
        let generator = ScriptedGenerator::replying(vec![Ok(png_uri(b"edited"))]);

        let input = MonthInput::image("Feb", scene.clone());
        run_scene_pipeline(&input, &style(), &analyzer, &generator)
            .await
            .unwrap();

        let calls = analyzer.calls();
        assert_eq!(calls[0].kind, SceneKind::Image);
        assert_eq!(calls[0].payload, scene.as_str());

        let generated = generator.calls();
        assert_eq!(generated[0].base_image, style());
        assert_eq!(generated[0].instruction, "match the style");
    }

    #[tokio::test]
    async fn malformed_scene_image_fails_before_analysis() {
        let analyzer = ScriptedAnalyzer::replying(vec![]);
        let generator = ScriptedGenerator::replying(vec![]);

        let input = MonthInput::image("Mar", DataUri::from_raw("not-a-data-uri"));
        let err = run_scene_pipeline(&input, &style(), &analyzer, &generator)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ItemError::Analysis(AnalysisError::InvalidImage(DataUriError::InvalidFormat(_)))
        ));
        assert!(analyzer.calls().is_empty());
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_text_is_a_validation_error() {
        let analyzer = ScriptedAnalyzer::replying(vec![]);
        let generator = ScriptedGenerator::replying(vec![]);

        let input = MonthInput::text("Apr", "   ");
        let err = run_scene_pipeline(&input, &style(), &analyzer, &generator)
            .await
            .unwrap_err();

        assert!(matches!(err, ItemError::Validation(_)));
        assert!(analyzer.calls().is_empty());
    }

    #[tokio::test]
    async fn blank_instruction_is_no_instruction() {
        let analyzer = ScriptedAnalyzer::replying(vec![Ok("   ")]);
        let generator = ScriptedGenerator::replying(vec![]);

        let input = MonthInput::text("May", "a beach");
        let err = run_scene_pipeline(&input, &style(), &analyzer, &generator)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ItemError::Analysis(AnalysisError::NoInstruction)
        ));
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_generated_image_is_no_image() {
        let analyzer = ScriptedAnalyzer::replying(vec![Ok("add a beach")]);
        let generator = ScriptedGenerator::replying(vec![Ok(DataUri::from_raw(""))]);

        let input = MonthInput::text("Jun", "a beach");
        let err = run_scene_pipeline(&input, &style(), &analyzer, &generator)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ItemError::Generation(GenerationError::NoImage)
        ));
    }

    #[tokio::test]
    async fn generation_failure_propagates() {
        let analyzer = ScriptedAnalyzer::replying(vec![Ok("add a beach")]);
        let generator = ScriptedGenerator::replying(vec![Err(GenerationError::Unreachable(
            "timeout".to_string(),
        ))]);

        let input = MonthInput::text("Jul", "a beach");
        let err = run_scene_pipeline(&input, &style(), &analyzer, &generator)
            .await
            .unwrap_err();

        assert!(err.is_generation());
    }
}
