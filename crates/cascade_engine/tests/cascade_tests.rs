//! Integration tests for cascade resolution
//!
//! These tests build a small document the way an upstream parser would hand
//! it over (partly from JSON) and run styles, lists and tables through the
//! engine together.

use cascade_engine::{
    detect_borders, CascadeConfig, CascadeError, NumberingTracker, StyleResolver, TableMode,
    TableTextConverter,
};
use doc_model::{
    AbstractNumbering, Border, BorderEdge, BorderSet, DocumentDefaults, Level, LevelSuffix,
    NumberFormat, Numbering, NumberingInstance, NumberingReference, Paragraph,
    ParagraphProperties, Style, StyleId, StyleSheet, Table, TableCell, TableProperties, TableRow,
};

const STYLES_JSON: &str = r#"[
    {
        "id": "Normal",
        "style_type": "paragraph",
        "is_default": true,
        "run_props": { "size": 22, "fonts": { "ascii": "Calibri" } }
    },
    {
        "id": "ListParagraph",
        "style_type": "paragraph",
        "based_on": "Normal",
        "paragraph_props": {
            "indentation": { "left": 720 },
            "numbering": { "num_id": 1, "ilvl": 0 }
        }
    },
    {
        "id": "Quote",
        "style_type": "paragraph",
        "based_on": "Normal",
        "run_props": { "italic": true, "color": "404040" }
    }
]"#;

fn style_sheet() -> StyleSheet {
    let styles: Vec<Style> = serde_json::from_str(STYLES_JSON).unwrap();
    StyleSheet::from_styles(DocumentDefaults::default(), styles)
}

fn outline_numbering() -> Numbering {
    let abs = AbstractNumbering::new(0)
        .with_level(Level::numbered(0, NumberFormat::Decimal, "%1."))
        .and_then(|a| a.with_level(Level::numbered(1, NumberFormat::Decimal, "%1.%2.")))
        .and_then(|a| {
            a.with_level(
                Level::numbered(2, NumberFormat::LowerRoman, "(%3)").with_suffix(LevelSuffix::Space),
            )
        })
        .unwrap();
    let mut numbering = Numbering::new();
    numbering.add_abstract(abs);
    numbering.add_instance(NumberingInstance::new(1, 0)).unwrap();
    numbering.add_instance(NumberingInstance::new(2, 0)).unwrap();
    numbering
}

#[test]
fn test_styles_from_json_resolve() {
    let sheet = style_sheet();
    let mut resolver = StyleResolver::new(&sheet);

    let quote = resolver.resolve_run_properties(&StyleId::new("Quote"));
    assert_eq!(quote.size, Some(22));
    assert_eq!(quote.italic, Some(true));
    assert_eq!(quote.color.as_deref(), Some("404040"));

    let list = resolver.resolve_paragraph_properties(&StyleId::new("ListParagraph"));
    assert_eq!(list.numbering, Some(NumberingReference::new(1, 0)));
    assert_eq!(list.indentation.and_then(|i| i.left), Some(720));
}

#[test]
fn test_list_paragraphs_in_document_order() {
    let sheet = style_sheet();
    let numbering = outline_numbering();
    let mut resolver = StyleResolver::new(&sheet);
    let mut tracker = NumberingTracker::new(&numbering);

    let level = |ilvl: u8| ParagraphProperties {
        numbering: Some(NumberingReference {
            num_id: None,
            ilvl: Some(ilvl),
        }),
        ..Default::default()
    };
    let paragraphs = vec![
        Paragraph::with_text("Intro").with_style("ListParagraph"),
        Paragraph::with_text("Detail")
            .with_style("ListParagraph")
            .with_formatting(level(1)),
        Paragraph::with_text("Sub")
            .with_style("ListParagraph")
            .with_formatting(level(2)),
        Paragraph::with_text("Sub")
            .with_style("ListParagraph")
            .with_formatting(level(2)),
        Paragraph::with_text("Detail")
            .with_style("ListParagraph")
            .with_formatting(level(1)),
        Paragraph::with_text("Next")
            .with_style("ListParagraph"),
        Paragraph::with_text("Detail")
            .with_style("ListParagraph")
            .with_formatting(level(1)),
        Paragraph::with_text("Plain text"),
    ];

    let labels: Vec<String> = paragraphs
        .iter()
        .map(|p| {
            let props = resolver.effective_paragraph(p);
            match props.numbering {
                Some(NumberingReference {
                    num_id: Some(num_id),
                    ilvl,
                }) => tracker.get_number(num_id, ilvl.unwrap_or(0)),
                _ => String::new(),
            }
        })
        .collect();

    assert_eq!(
        labels,
        vec!["1.\t", "1.1.\t", "(i) ", "(ii) ", "1.2.\t", "2.\t", "2.1.\t", ""]
    );
}

#[test]
fn test_instances_count_independently() {
    let numbering = outline_numbering();
    let mut tracker = NumberingTracker::new(&numbering);

    assert_eq!(tracker.get_number(1, 0), "1.\t");
    assert_eq!(tracker.get_number(1, 0), "2.\t");
    assert_eq!(tracker.get_number(2, 0), "1.\t");
    assert_eq!(tracker.get_number(1, 0), "3.\t");
}

#[test]
fn test_outline_restart_sequence() {
    let numbering = outline_numbering();
    let mut tracker = NumberingTracker::new(&numbering);

    tracker.get_number(1, 0);
    let nested: Vec<String> = [1, 1, 0, 1]
        .iter()
        .map(|&ilvl| tracker.get_number(1, ilvl))
        .filter(|label| label.matches('.').count() == 2)
        .collect();
    assert_eq!(nested, vec!["1.1.\t", "1.2.\t", "2.1.\t"]);
}

#[test]
fn test_table_style_borders_drive_auto_mode() {
    let sheet = StyleSheet::from_styles(
        DocumentDefaults::default(),
        vec![Style::table("Rules").with_table_props(TableProperties {
            borders: Some(
                BorderSet::default()
                    .with(BorderEdge::Top, Border::single())
                    .with(BorderEdge::Bottom, Border::single()),
            ),
            ..Default::default()
        })],
    );
    let mut resolver = StyleResolver::new(&sheet);

    let table = Table::new(vec![
        TableRow::from_texts(["a", "b"]),
        TableRow::from_texts(["c", "d"]),
    ])
    .with_style("Rules");

    // Without the style the table has no borders at all
    assert!(!detect_borders(&table).has_any());

    let converter = TableTextConverter::from_config(&CascadeConfig::default());
    let text = converter.convert_resolved(&mut resolver, &table);
    assert_eq!(text, "---------\n  a   b  \n  c   d  \n---------");

    assert_eq!(converter.convert(&table), "a\tb\nc\td");
}

#[test]
fn test_cell_none_suppresses_table_top() {
    let cell = || {
        TableCell::with_text("x")
            .with_borders(BorderSet::default().with(BorderEdge::Top, Border::None))
    };
    let table = Table::new(vec![TableRow::new(vec![cell(), cell()])])
        .with_borders(BorderSet::all(Border::single()));

    let info = detect_borders(&table);
    assert!(!info.top);
    assert!(info.bottom && info.left && info.right && info.inside_v);
}

#[test]
fn test_config_selects_table_mode() {
    let config = CascadeConfig::from_json(r#"{"table_mode": "plain", "default_bullet": "-"}"#)
        .unwrap();
    assert_eq!(config.table_mode, TableMode::Plain);

    let table = Table::new(vec![TableRow::from_texts(["a", "b"])]);
    assert_eq!(TableTextConverter::from_config(&config).convert(&table), "a  b");

    let mut numbering = Numbering::new();
    numbering.add_abstract(AbstractNumbering::new(0).with_level(Level::bullet(0, "")).unwrap());
    numbering.add_instance(NumberingInstance::new(1, 0)).unwrap();
    let mut tracker = NumberingTracker::with_config(&numbering, &config);
    assert_eq!(tracker.get_number(1, 0), "-");
}

#[test]
fn test_bad_config_is_an_error() {
    let err = CascadeConfig::from_json("{\"table_mode\": 3}").unwrap_err();
    assert!(matches!(err, CascadeError::Config(_)));
}

#[test]
fn test_model_errors_convert() {
    let mut numbering = Numbering::new();
    let result: cascade_engine::Result<()> = numbering
        .add_instance(NumberingInstance::new(1, 42))
        .map_err(CascadeError::from);
    assert!(matches!(result, Err(CascadeError::Model(_))));
}
