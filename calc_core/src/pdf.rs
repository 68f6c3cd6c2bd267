//! # PDF Generation Module
//!
//! Renders a calculation (inputs, results and formula) to a PDF report using
//! Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Data is injected via string replacement before compilation
//! - User-supplied text is escaped for Typst markup
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::calculations::CalculationRequest;
//! use calc_core::pdf::{render_calculation_pdf, CalculationReport};
//! use serde_json::json;
//!
//! let request = CalculationRequest::from_json("bmi", json!({"weight": 70, "height": 175})).unwrap();
//! let result = request.evaluate().unwrap();
//! let report = CalculationReport::from_evaluation(&request, &result, "BMI Calculator").unwrap();
//! let pdf_bytes = render_calculation_pdf(&report).unwrap();
//! std::fs::write("bmi_report.pdf", pdf_bytes).unwrap();
//! ```

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::CalculationRequest;
use crate::errors::{CalcError, CalcResult};
use crate::i18n::{Locale, MessageStore};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
    /// Date reported to `datetime.today()`
    today: NaiveDate,
}

impl PdfWorld {
    fn new(source: String, today: NaiveDate) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
            today,
        }
    }

    /// Fonts bundled with typst-assets (Libertinus Serif covers Latin,
    /// Cyrillic and Turkish glyphs).
    fn load_fonts() -> Vec<Font> {
        typst_assets::fonts()
            .flat_map(|font_bytes| Font::iter(Bytes::new(font_bytes.to_vec())))
            .collect()
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        Datetime::from_ymd(
            self.today.year(),
            u8::try_from(self.today.month()).ok()?,
            u8::try_from(self.today.day()).ok()?,
        )
    }
}

// ============================================================================
// Report Model
// ============================================================================

/// One labelled value in a report table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

impl ReportRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        ReportRow {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Section headings, localisable through the `pdf.*` messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLabels {
    pub inputs: String,
    pub results: String,
    pub formula: String,
    pub generated: String,
    pub disclaimer: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        ReportLabels {
            inputs: "Inputs".to_string(),
            results: "Results".to_string(),
            formula: "Formula".to_string(),
            generated: "Generated".to_string(),
            disclaimer: "Results are estimates for informational purposes only.".to_string(),
        }
    }
}

impl ReportLabels {
    pub fn from_messages(messages: &MessageStore, locale: Locale) -> Self {
        let defaults = ReportLabels::default();
        let text = |key: &str, fallback: String| {
            messages
                .get_str(locale, &format!("pdf.{}", key))
                .map(str::to_string)
                .unwrap_or(fallback)
        };
        ReportLabels {
            inputs: text("inputs", defaults.inputs),
            results: text("results", defaults.results),
            formula: text("formula", defaults.formula),
            generated: text("generated", defaults.generated),
            disclaimer: text("disclaimer", defaults.disclaimer),
        }
    }
}

/// Everything printed in a calculation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub title: String,
    /// Calculator slug
    pub calculator: String,
    pub locale: Locale,
    pub generated_on: NaiveDate,
    pub inputs: Vec<ReportRow>,
    pub results: Vec<ReportRow>,
    pub formula: Option<String>,
    #[serde(default)]
    pub labels: ReportLabels,
}

impl CalculationReport {
    /// Build a report from an evaluated request.
    ///
    /// Scalar fields become rows; nested objects are flattened with dotted
    /// labels (`macros.protein_g`); arrays of scalars are joined; arrays of
    /// objects (schedules, zones) are left out. The result's `formula` field
    /// becomes the report formula.
    pub fn from_evaluation(
        request: &CalculationRequest,
        result: &Value,
        title: impl Into<String>,
    ) -> CalcResult<Self> {
        let input = request.input_json()?;

        let mut inputs = Vec::new();
        flatten_rows("", &input, &mut inputs);

        let mut results = Vec::new();
        let formula = match result {
            Value::Object(map) => {
                for (key, value) in map {
                    if key != "formula" {
                        flatten_rows(key, value, &mut results);
                    }
                }
                map.get("formula").and_then(Value::as_str).map(str::to_string)
            }
            other => {
                flatten_rows("result", other, &mut results);
                None
            }
        };

        Ok(CalculationReport {
            title: title.into(),
            calculator: request.id().slug().to_string(),
            locale: Locale::DEFAULT,
            generated_on: Local::now().date_naive(),
            inputs,
            results,
            formula,
            labels: ReportLabels::default(),
        })
    }

    pub fn with_locale(mut self, locale: Locale, messages: &MessageStore) -> Self {
        self.locale = locale;
        self.labels = ReportLabels::from_messages(messages, locale);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn flatten_rows(prefix: &str, value: &Value, rows: &mut Vec<ReportRow>) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_rows(&join(key), nested, rows);
            }
        }
        Value::Array(items) => {
            let scalars: Option<Vec<String>> = items.iter().map(scalar_text).collect();
            if let Some(scalars) = scalars {
                if !scalars.is_empty() {
                    rows.push(ReportRow::new(prefix, scalars.join(", ")));
                }
            }
        }
        scalar => {
            if let Some(text) = scalar_text(scalar) {
                rows.push(ReportRow::new(prefix, text));
            }
        }
    }
}

// ============================================================================
// PDF Template
// ============================================================================

const REPORT_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 2.5cm, bottom: 2.5cm, left: 2cm, right: 2cm),
  header: align(right)[
    #text(size: 9pt, fill: gray)[Calcora]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[{{SLUG}}]],
      align(center)[#text(size: 9pt)[#counter(page).display()]],
      align(right)[#text(size: 9pt)[{{GENERATED_LABEL}}: {{DATE}}]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 11pt, lang: "{{LANG}}")

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[{{TITLE}}]
  ]
]

#v(12pt)

== {{INPUTS_LABEL}}

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
{{INPUT_ROWS}}
)

#v(12pt)

== {{RESULTS_LABEL}}

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
{{RESULT_ROWS}}
)

{{FORMULA_BLOCK}}

#v(16pt)
#text(size: 9pt, fill: gray)[{{DISCLAIMER}}]
"##;

/// Escape special Typst characters in user-provided text
fn escape_typst(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' | '_' | '#' | '$' | '@' | '<' | '>' | '\\' | '`' | '[' | ']' | '~' | '=' | '/' => {
                out.push('\\');
                out.push(c);
            }
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

fn build_rows(rows: &[ReportRow]) -> String {
    if rows.is_empty() {
        return "  [-], [-],".to_string();
    }
    rows.iter()
        .map(|row| format!("  [{}], [{}],", escape_typst(&row.label), escape_typst(&row.value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Typst source for a report. Exposed for inspection in tests and tooling.
pub fn report_source(report: &CalculationReport) -> String {
    let formula_block = match &report.formula {
        Some(formula) => format!(
            "#v(12pt)\n\n== {}\n\n#block(fill: rgb(\"#f7f7f7\"), inset: 10pt, radius: 4pt)[{}]",
            escape_typst(&report.labels.formula),
            escape_typst(formula)
        ),
        None => String::new(),
    };

    let date = report.generated_on.format("%Y-%m-%d").to_string();
    fill_template(
        REPORT_TEMPLATE,
        &[
            ("TITLE", escape_typst(&report.title)),
            ("SLUG", escape_typst(&report.calculator)),
            ("LANG", report.locale.code().to_string()),
            ("DATE", date),
            ("GENERATED_LABEL", escape_typst(&report.labels.generated)),
            ("INPUTS_LABEL", escape_typst(&report.labels.inputs)),
            ("RESULTS_LABEL", escape_typst(&report.labels.results)),
            ("INPUT_ROWS", build_rows(&report.inputs)),
            ("RESULT_ROWS", build_rows(&report.results)),
            ("FORMULA_BLOCK", formula_block),
            ("DISCLAIMER", escape_typst(&report.labels.disclaimer)),
        ],
    )
}

/// Replace `{{NAME}}` placeholders in a single pass. Substituted text is
/// never scanned again, so user values cannot expand other placeholders.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let value = after.find("}}").and_then(|end| {
            let name = &after[..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (value, end))
        });
        match value {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Render a calculation report to PDF bytes.
pub fn render_calculation_pdf(report: &CalculationReport) -> CalcResult<Vec<u8>> {
    let world = PdfWorld::new(report_source(report), report.generated_on);

    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::internal(format!("Typst compilation failed: {}", error_msgs.join("; ")))
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::internal(format!("PDF rendering failed: {}", error_msgs.join("; ")))
    })?;

    Ok(pdf_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bmi_report() -> CalculationReport {
        let request =
            CalculationRequest::from_json("bmi", json!({"weight": 70, "height": 175})).unwrap();
        let result = request.evaluate().unwrap();
        CalculationReport::from_evaluation(&request, &result, "BMI Calculator")
            .unwrap()
            .with_date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    #[test]
    fn test_rows_flattened_from_evaluation() {
        let report = bmi_report();
        assert_eq!(report.calculator, "bmi");
        assert!(report.inputs.contains(&ReportRow::new("weight", "70.0")));
        assert!(report.results.contains(&ReportRow::new("category", "normal")));
        assert!(report.results.iter().all(|r| r.label != "formula"));
        assert!(report.formula.is_some());
    }

    #[test]
    fn test_nested_objects_and_arrays() {
        let mut rows = Vec::new();
        flatten_rows(
            "",
            &json!({"macros": {"protein_g": 150}, "values": [1, 2], "schedule": [{"month": 1}], "none": null}),
            &mut rows,
        );
        assert_eq!(
            rows,
            vec![ReportRow::new("macros.protein_g", "150"), ReportRow::new("values", "1, 2")]
        );
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("a*b #c [d]"), "a\\*b \\#c \\[d\\]");
        assert_eq!(escape_typst("line\nbreak"), "line break");
    }

    #[test]
    fn test_source_contains_data() {
        let source = report_source(&bmi_report());
        assert!(source.contains("BMI Calculator"));
        assert!(source.contains("2025-03-14"));
        assert!(source.contains("[category], [normal],"));
        assert!(!source.contains("{{"));
    }

    #[test]
    fn test_placeholders_in_user_text_stay_literal() {
        let mut report = bmi_report();
        report.title = "{{RESULT_ROWS}} and {{DISCLAIMER}}".to_string();
        let source = report_source(&report);
        assert!(source.contains("{{RESULT_ROWS}} and {{DISCLAIMER}}"));
        assert_eq!(source.matches("[category], [normal],").count(), 1);
    }

    #[test]
    fn test_fill_template() {
        let filled = fill_template("a {{X}} b {{Y}} {{", &[("X", "{{Y}}".to_string()), ("Y", "2".to_string())]);
        assert_eq!(filled, "a {{Y}} b 2 {{");
    }

    #[test]
    fn test_labels_from_messages() {
        let store = MessageStore::from_trees([(Locale::De, json!({"pdf": {"inputs": "Eingaben"}}))]);
        let labels = ReportLabels::from_messages(&store, Locale::De);
        assert_eq!(labels.inputs, "Eingaben");
        assert_eq!(labels.results, "Results");
    }

    #[test]
    fn test_pdf_generation() {
        let pdf = render_calculation_pdf(&bmi_report());
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }
}
