//! Visual-encoding integration tests: records through the palette mapper

mod common;

use anyhow::Result;
use common::BatchBuilder;
use serosurvey::{
    DiscretePalette, EmphasisMode, InteractionState, NormalizerConfig, PaletteToken,
    SurveyPipeline, encode, retro_interaction_counts,
};

fn mixed_colony_batch() -> serosurvey::RecordBatch {
    BatchBuilder::new()
        .managed(
            "pier", "-117.1", "32.7", "06/07/2023", ">12mo", "adult", "320", "1", "1",
        )
        .managed(
            "pier", "-117.2", "32.8", "06/08/2023", ">12mo", "adult", "160", "1", "0",
        )
        .managed(
            "pier", "-117.3", "32.9", "06/09/2023", "6-12mo", "juvenile", "<40", "0", "1",
        )
        .managed(
            "pier", "-117.4", "33.0", "06/10/2023", "<6mo", "kitten", "80", "0", "0",
        )
        .build()
}

#[test]
fn coinfection_map_highlights_exactly_the_designated_tuple() -> Result<()> {
    let outcome = SurveyPipeline::new(NormalizerConfig::default())
        .process(&[mixed_colony_batch()])?;

    let palette = DiscretePalette::default();
    let designated = InteractionState::pair(true, true);

    let mut highlighted = 0;
    for record in outcome.survey.records() {
        let token = encode(
            &record.retro_interaction(),
            &designated,
            &palette,
            EmphasisMode::Solid,
        )?;
        match token {
            PaletteToken::Color(color) if color == palette.highlight => highlighted += 1,
            PaletteToken::Color(color) => assert_eq!(color, palette.background),
            PaletteToken::Suppress => panic!("solid mode never suppresses"),
        }
    }
    assert_eq!(highlighted, 1);
    Ok(())
}

#[test]
fn emphasis_mode_suppresses_background_records() -> Result<()> {
    let outcome = SurveyPipeline::new(NormalizerConfig::default())
        .process(&[mixed_colony_batch()])?;

    let palette = DiscretePalette::default();
    let designated = InteractionState::pair(true, true);

    let mut rendered = 0;
    for record in outcome.survey.records() {
        let token = encode(
            &record.retro_interaction(),
            &designated,
            &palette,
            EmphasisMode::HighlightOnly,
        )?;
        if token != PaletteToken::Suppress {
            assert_eq!(token, PaletteToken::Color(palette.highlight));
            rendered += 1;
        }
    }
    assert_eq!(rendered, 1);
    Ok(())
}

#[test]
fn cohort_size_equals_interaction_bucket_sum() -> Result<()> {
    let outcome = SurveyPipeline::new(NormalizerConfig::default())
        .process(&[mixed_colony_batch()])?;

    let counts = retro_interaction_counts(outcome.survey.records());
    let bucket_sum: usize = counts.values().sum();

    assert_eq!(outcome.cohorts.len(), 1);
    assert_eq!(outcome.cohorts[0].size, bucket_sum);
    Ok(())
}

#[test]
fn triple_interaction_uses_the_clinical_flag() -> Result<()> {
    let outcome = SurveyPipeline::new(NormalizerConfig::default())
        .process(&[mixed_colony_batch()])?;

    let palette = DiscretePalette::default();
    let designated = InteractionState::triple(true, true, true);

    let mut highlighted = 0;
    for record in outcome.survey.records() {
        let state = record.full_interaction().expect("complete records");
        if encode(&state, &designated, &palette, EmphasisMode::Solid)?
            == PaletteToken::Color(palette.highlight)
        {
            highlighted += 1;
        }
    }
    // Only the 320-titer FIV+FeLV cat satisfies all three factors
    assert_eq!(highlighted, 1);
    Ok(())
}

#[test]
fn arity_mismatch_fails_loudly() {
    let palette = DiscretePalette::default();
    let pair = InteractionState::pair(true, true);
    let triple = InteractionState::triple(true, true, true);

    assert!(encode(&pair, &triple, &palette, EmphasisMode::Solid).is_err());
    assert!(InteractionState::new(&[true; 4]).is_err());
}
