use super::parser::parse;
use super::*;
use crate::model::Document;

fn doc(id: &str, name: &str, text: &str) -> Document {
    Document {
        id: id.to_string(),
        name: name.to_string(),
        text: text.to_string(),
    }
}

const LABOR_CODE: &str = "نظام العمل\n\
الباب الأول: التعريفات\n\
المادة الأولى: يسمى هذا النظام نظام العمل.\n\
المادة الثانية: يقصد بالألفاظ الآتية المعاني المبينة أمامها.\n\
العامل: كل شخص طبيعي يعمل لمصلحة صاحب عمل.\n\
المادة الحادية والعشرون:\n\
تسري أحكام هذا النظام على عقود العمل.\n\
المادة الثانية والعشرون: يلتزم صاحب العمل بالأجر.\n";

#[test]
fn parse_assigns_ids_by_first_distinct_pair() {
    let text = "الأجر مستحق (المصدر: نظام العمل، المادة 22) ويحدد العقد (المصدر: نظام العمل، المادة 1-3) \
                كما سبق (المصدر: نظام العمل، المادة 22).";
    let parsed = parse(text);

    assert_eq!(parsed.citations.len(), 2);
    assert_eq!(parsed.citations[0].id, 1);
    assert_eq!(parsed.citations[0].article_numbers, vec![22]);
    assert_eq!(parsed.citations[1].id, 2);
    assert_eq!(parsed.citations[1].article_numbers, vec![1, 2, 3]);

    let ids = parsed
        .fragments
        .iter()
        .filter_map(|fragment| match fragment {
            Fragment::Citation { id } => Some(*id),
            _ => None,
        })
        .collect::<Vec<usize>>();
    assert_eq!(ids, vec![1, 2, 1]);
}

#[test]
fn differently_written_sets_collapse_to_one_id() {
    let parsed = parse(
        "أولاً (المصدر: نظام العمل، المادة 1-3) ثم (المصدر: **نظام العمل**، المادة 1،2،3)",
    );
    assert_eq!(parsed.citations.len(), 1);
    assert_eq!(parsed.citations[0].doc_name, "نظام العمل");
    assert_eq!(parsed.rendered_text(), "أولاً [1] ثم [1]");
}

#[test]
fn parse_is_idempotent() {
    let text = "نص (المصدر: نظام العمل، المادة 5) و(المصدر: نظام المرافعات - المادة الثالثة)";
    assert_eq!(parse(text), parse(text));
    assert_eq!(parse(text).citations[1].article_numbers, vec![3]);
}

#[test]
fn parenthesised_article_numbers_are_cited() {
    let parsed = parse("نص (المصدر: نظام العمل، المادة (5)) تم");
    assert_eq!(parsed.citations.len(), 1);
    assert_eq!(parsed.citations[0].doc_name, "نظام العمل");
    assert_eq!(parsed.citations[0].article_numbers, vec![5]);
    assert_eq!(parsed.rendered_text(), "نص [1] تم");
}

#[test]
fn document_name_may_carry_a_parenthesised_qualifier() {
    let parsed = parse("انظر (المصدر: نظام العمل (المعدل)، المادة 5) أيضاً");
    assert_eq!(parsed.citations.len(), 1);
    assert_eq!(parsed.citations[0].doc_name, "نظام العمل (المعدل)");
    assert_eq!(parsed.citations[0].article_numbers, vec![5]);
    assert_eq!(parsed.rendered_text(), "انظر [1] أيضاً");
}

#[test]
fn article_list_may_wrap_onto_the_next_line() {
    let parsed = parse("انظر (المصدر: نظام العمل، المادة 1،\n2) أيضاً");
    assert_eq!(parsed.citations.len(), 1);
    assert_eq!(parsed.citations[0].article_numbers, vec![1, 2]);
    assert_eq!(parsed.rendered_text(), "انظر [1] أيضاً");
}

#[test]
fn unclosed_marker_does_not_swallow_the_next_one() {
    let parsed = parse("(المصدر: نظام العمل) ثم (المصدر: نظام المرافعات، المادة 2)");
    assert_eq!(parsed.citations.len(), 1);
    assert_eq!(parsed.citations[0].doc_name, "نظام المرافعات");
    assert_eq!(parsed.rendered_text(), "(المصدر: نظام العمل) ثم [1]");
}

#[test]
fn marker_without_numbers_stays_literal() {
    let text = "راجع (المصدر: نظام العمل، المادة الأخيرة) للتفاصيل";
    let parsed = parse(text);
    assert!(parsed.citations.is_empty());
    assert_eq!(parsed.rendered_text(), text);
}

#[test]
fn malformed_marker_is_left_as_text() {
    let text = "(المصدر نظام العمل المادة 5) بلا فاصل";
    let parsed = parse(text);
    assert!(parsed.citations.is_empty());
    assert_eq!(
        parsed.fragments,
        vec![Fragment::Text {
            text: text.to_string()
        }]
    );
}

#[test]
fn citation_markers_are_never_bold_split() {
    let parsed = parse("**مهم** (المصدر: **نظام العمل**، المادة 4) **أيضاً**");
    assert_eq!(
        parsed.fragments,
        vec![
            Fragment::Bold {
                text: "مهم".to_string()
            },
            Fragment::Text {
                text: " ".to_string()
            },
            Fragment::Citation { id: 1 },
            Fragment::Text {
                text: " ".to_string()
            },
            Fragment::Bold {
                text: "أيضاً".to_string()
            },
        ]
    );
}

#[test]
fn aggregate_groups_by_document_in_first_occurrence_order() {
    let parsed = parse(
        "(المصدر: نظام المرافعات، المادة 7) (المصدر: نظام العمل، المادة 1-3) \
         (المصدر: نظام المرافعات، المادة 2، 8) (المصدر: نظام العمل، المادة 5)",
    );
    let footer = aggregate(&parsed.citations);

    assert_eq!(footer.len(), 2);
    assert_eq!(footer[0].doc_name, "نظام المرافعات");
    assert_eq!(footer[0].ids, vec![1, 3]);
    assert_eq!(footer[0].article_numbers, vec![2, 7, 8]);
    assert_eq!(footer[1].doc_name, "نظام العمل");
    assert_eq!(footer[1].ids, vec![2, 4]);
    assert_eq!(format_ranges(&footer[1].article_numbers), "1-3، 5");
}

#[test]
fn extract_spans_until_the_next_article() {
    let text = "...\nالمادة 1: نص أ\nالمادة 2: نص ب\n";
    assert_eq!(extract(text, 1).as_deref(), Some("المادة 1:\nنص أ"));
    assert_eq!(extract(text, 2).as_deref(), Some("المادة 2:\nنص ب"));
}

#[test]
fn extract_finds_ordinal_headings_as_well_as_digits() {
    assert_eq!(
        extract(LABOR_CODE, 21).as_deref(),
        Some("المادة الحادية والعشرون:\nتسري أحكام هذا النظام على عقود العمل.")
    );
    assert_eq!(
        extract("المادة 21: تسري الأحكام.\nالمادة 22: يلتزم.", 21).as_deref(),
        Some("المادة 21:\nتسري الأحكام.")
    );
}

#[test]
fn extract_keeps_multiline_article_bodies() {
    let article = extract(LABOR_CODE, 2).expect("article two should extract");
    assert!(article.starts_with("المادة الثانية:"));
    assert!(article.ends_with("يعمل لمصلحة صاحب عمل."));
    assert!(!article.contains("الحادية"));
}

#[test]
fn extract_does_not_match_a_number_prefix() {
    let text = "المادة 10: العاشرة\nالمادة 11: الحادية عشرة";
    assert!(extract(text, 1).is_none());
}

#[test]
fn extract_does_not_take_a_longer_ordinal_for_a_shorter_one() {
    let text = "المادة الثانية عشرة: نص\nالمادة الأولى بعد المائة: نص آخر";
    assert!(extract(text, 2).is_none());
    assert!(extract(text, 1).is_none());
    assert!(extract(text, 12).is_some());
    assert!(extract(text, 101).is_some());
}

#[test]
fn extract_accepts_parenthesised_and_arabic_indic_numbers() {
    assert_eq!(
        extract("المادة (7) يحظر التمييز.", 7).as_deref(),
        Some("المادة (7)\nيحظر التمييز.")
    );
    assert_eq!(
        extract("المادة ١٠: نص\nالمادة ١١: نص", 10).as_deref(),
        Some("المادة ١٠:\nنص")
    );
}

#[test]
fn lookup_reports_missing_document_without_failing() {
    let docs = vec![doc("labor", "نظام العمل", LABOR_CODE)];
    let parsed = parse("(المصدر: نظام غير موجود، المادة 1)");
    let citation = parsed.citation(1).expect("citation should parse");

    let lookup = lookup_articles(&docs, &citation.doc_name, &citation.article_numbers);
    assert_eq!(lookup.status(), "document_not_found");

    let payload = lookup.into_viewer_payload();
    assert_eq!(payload.doc_name, "نظام غير موجود");
    assert_eq!(
        payload.content,
        vec!["عذراً، النظام المطلوب غير موجود في القائمة.".to_string()]
    );
}

#[test]
fn lookup_keeps_partial_results_in_requested_order() {
    let docs = vec![doc("labor", "نظام العمل", LABOR_CODE)];
    let lookup = lookup_articles(&docs, "**نظام العمل**", &[22, 1, 40]);

    assert_eq!(lookup.status(), "partial");
    match &lookup {
        ArticleLookup::Extracted {
            doc_name,
            content,
            missing_articles,
        } => {
            assert_eq!(doc_name, "نظام العمل");
            assert_eq!(content.len(), 2);
            assert!(content[0].starts_with("المادة الثانية والعشرون"));
            assert!(content[1].starts_with("المادة الأولى"));
            assert_eq!(missing_articles, &vec![40]);
        }
        other => panic!("unexpected lookup outcome: {other:?}"),
    }
}

#[test]
fn lookup_with_nothing_extracted_is_its_own_outcome() {
    let docs = vec![doc("labor", "نظام العمل", LABOR_CODE)];
    let lookup = lookup_articles(&docs, "نظام العمل", &[40, 41]);
    assert_eq!(lookup.status(), "not_extracted");
    assert_eq!(
        lookup.into_viewer_payload().content,
        vec!["عذراً، لم نتمكن من استخراج نص المواد (40، 41) تلقائياً. قد يكون التنسيق مختلفاً."
            .to_string()]
    );
}

#[test]
fn streaming_keeps_ids_stable_as_text_grows() {
    let answer = "يستحق العامل أجره (المصدر: نظام العمل، المادة 22) \
                  وتسري الأحكام (المصدر: نظام العمل، المادة 21) \
                  كما تقدم (المصدر: نظام العمل، المادة 22).";
    let chunks = answer
        .chars()
        .collect::<Vec<char>>()
        .chunks(7)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>();

    let mut stream = StreamingAnswer::new();
    let mut seen = Vec::<Citation>::new();
    for chunk in &chunks {
        seen.extend(stream.push_chunk(chunk));
        for citation in &seen {
            assert_eq!(stream.parsed().citation(citation.id), Some(citation));
        }
    }

    assert_eq!(stream.text(), answer);
    assert_eq!(stream.parsed(), &parse(answer));
    assert_eq!(seen.len(), 2);
    assert_eq!(stream.footer()[0].ids, vec![1, 2]);
}

#[test]
fn streaming_error_chunk_is_kept_verbatim() {
    let mut stream = StreamingAnswer::new();
    let chunk = "حدث خطأ أثناء الاتصال بالمساعد الذكي: quota exceeded";
    assert!(stream.push_chunk(chunk).is_empty());
    assert_eq!(stream.failure(), Some(chunk));
    assert!(stream.push_chunk("(المصدر: نظام العمل، المادة 1)").is_empty());
    assert!(stream.parsed().citations.is_empty());
}
