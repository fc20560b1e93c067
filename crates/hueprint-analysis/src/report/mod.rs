//! Palette accessibility report: 5 fixed text/background pairs.
//!
//! Consumed by the palette editor's live indicators and by the PDF
//! generator's compliance section.

mod pairs;

use serde::Serialize;

use hueprint_core::{Color, ColorError, ColorPalette};

use crate::contrast::{ContrastResult, TextSize};

pub use pairs::ReportPair;

/// Accessibility of a palette's key text/background pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityReport {
    pub text_on_background: ContrastResult,
    pub text_secondary_on_background: ContrastResult,
    pub text_on_brand: ContrastResult,
    pub text_on_highlight: ContrastResult,
    pub text_on_accent: ContrastResult,
    /// AND of every pair's `is_accessible`.
    pub overall_accessible: bool,
}

/// One printable row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub label: &'static str,
    /// `"N.NN:1"`.
    pub ratio: String,
    /// `"AA"`, `"AAA"`, or `"FAIL"`.
    pub badge: &'static str,
}

impl AccessibilityReport {
    pub fn result(&self, pair: ReportPair) -> &ContrastResult {
        match pair {
            ReportPair::TextOnBackground => &self.text_on_background,
            ReportPair::TextSecondaryOnBackground => &self.text_secondary_on_background,
            ReportPair::TextOnBrand => &self.text_on_brand,
            ReportPair::TextOnHighlight => &self.text_on_highlight,
            ReportPair::TextOnAccent => &self.text_on_accent,
        }
    }

    /// `(pair, result)` in report order.
    pub fn pairs(&self) -> impl Iterator<Item = (ReportPair, &ContrastResult)> + '_ {
        ReportPair::ALL.iter().map(move |&pair| (pair, self.result(pair)))
    }

    /// Pairs below AA.
    pub fn failing(&self) -> Vec<ReportPair> {
        self.pairs()
            .filter(|(_, result)| !result.is_accessible)
            .map(|(pair, _)| pair)
            .collect()
    }

    /// Rows for the PDF compliance section.
    pub fn lines(&self) -> Vec<ReportLine> {
        self.pairs()
            .map(|(pair, result)| ReportLine {
                label: pair.label(),
                ratio: result.ratio.to_string(),
                badge: result.level.as_str(),
            })
            .collect()
    }
}

/// Evaluate the fixed pairs of `palette` with normal-text thresholds.
pub fn generate_accessibility_report(palette: &ColorPalette) -> AccessibilityReport {
    build_report(palette, |fg, bg| ContrastResult::between(fg, bg, TextSize::Normal))
}

/// Build the palette from the editor's `{role: hex}` map, then report.
/// Fails on the first malformed color, unknown role, or missing role.
pub fn report_from_hex_map<'a, I>(entries: I) -> Result<AccessibilityReport, ColorError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let palette = ColorPalette::from_hex_map(entries)?;
    Ok(generate_accessibility_report(&palette))
}

pub(crate) fn build_report<F>(palette: &ColorPalette, mut evaluate: F) -> AccessibilityReport
where
    F: FnMut(Color, Color) -> ContrastResult,
{
    let mut eval = |pair: ReportPair| {
        let (fg, bg) = pair.roles();
        evaluate(palette.get(fg), palette.get(bg))
    };

    let text_on_background = eval(ReportPair::TextOnBackground);
    let text_secondary_on_background = eval(ReportPair::TextSecondaryOnBackground);
    let text_on_brand = eval(ReportPair::TextOnBrand);
    let text_on_highlight = eval(ReportPair::TextOnHighlight);
    let text_on_accent = eval(ReportPair::TextOnAccent);

    let overall_accessible = [
        &text_on_background,
        &text_secondary_on_background,
        &text_on_brand,
        &text_on_highlight,
        &text_on_accent,
    ]
    .iter()
    .all(|r| r.is_accessible);

    AccessibilityReport {
        text_on_background,
        text_secondary_on_background,
        text_on_brand,
        text_on_highlight,
        text_on_accent,
        overall_accessible,
    }
}
