//! Document-level parsing tests
//!
//! Each test parses a small inline source and checks the resulting structure with the fluent
//! assertion API.

use markwhen::markwhen::testing::assert_doc;
use markwhen::{
    parse_document, parse_document_with_options, DateFormat, ErrorKind, HeaderPolicy,
    ParseOptions,
};
use rstest::rstest;

#[test]
fn test_title_only() {
    let doc = parse_document("title: This is a title").unwrap();

    assert_doc(&doc).page_count(1).tag_count(0).page(0, |page| {
        page.title("This is a title")
            .description("")
            .date_format(DateFormat::MonthDayYear)
            .collection_count(0);
    });
}

#[test]
fn test_description_only() {
    let doc = parse_document("description: This is a description").unwrap();

    assert_doc(&doc).page_count(1).page(0, |page| {
        page.title("")
            .description("This is a description")
            .collection_count(0);
    });
}

#[test]
fn test_eu_phase_scenario() {
    let doc = parse_document("title: T\ndateFormat: d/M/y\n01/01/2023 - 14/01/2023: Phase 1\n")
        .unwrap();

    assert_doc(&doc).page_count(1).page(0, |page| {
        page.title("T")
            .date_format(DateFormat::DayMonthYear)
            .collection_count(1)
            .collection(0, |free| {
                free.is_free().event_count(1).event(0, |event| {
                    event
                        .from_date(2023, 1, 1)
                        .to_date(2023, 1, 14)
                        .body("Phase 1");
                });
            });
    });
}

#[test]
fn test_empty_group_scenario() {
    let doc = parse_document("group potato\nendGroup\n").unwrap();

    assert_doc(&doc).page_count(1).page(0, |page| {
        page.title("")
            .description("")
            .date_format(DateFormat::MonthDayYear)
            .collection_count(1)
            .collection(0, |group| {
                group.is_group().collapsed(false).title("potato").event_count(0);
            });
    });
}

#[test]
fn test_two_title_pages_scenario() {
    let source = "title: This is a title for page 1\n_-_-_break_-_-_\ntitle: This is a title for page 2";
    let doc = parse_document(source).unwrap();

    assert_doc(&doc)
        .page_count(2)
        .page(0, |page| {
            page.title("This is a title for page 1").collection_count(0);
        })
        .page(1, |page| {
            page.title("This is a title for page 2").collection_count(0);
        });
}

#[test]
fn test_body_is_kept_verbatim() {
    let doc = parse_document("07/03/2023 - 07/10/2023: Phase 4 - kickoff! #Launch: go").unwrap();

    assert_doc(&doc).page(0, |page| {
        page.collection(0, |free| {
            free.event(0, |event| {
                event.body("Phase 4 - kickoff! #Launch: go").tags(&["Launch"]);
            });
        });
    });
}

#[test]
fn test_free_runs_around_group() {
    let source = "\
01/01/2023: Before
group Team
01/02/2023: Inside
endGroup
01/03/2023: After
";
    let doc = parse_document(source).unwrap();

    assert_doc(&doc).event_count(3).page(0, |page| {
        page.collection_count(3)
            .collection(0, |c| {
                c.is_free().event_count(1);
            })
            .collection(1, |c| {
                c.is_group().title("Team").event_count(1).event(0, |e| {
                    e.body("Inside");
                });
            })
            .collection(2, |c| {
                c.is_free().event_count(1).event(0, |e| {
                    e.body("After");
                });
            });
    });
}

#[rstest]
#[case("group G\n01/01/2023: x\nendGroup\n")]
#[case("group G\n01/01/2023: x\nendSection\n")]
fn test_either_end_keyword_closes_group(#[case] source: &str) {
    let doc = parse_document(source).unwrap();

    assert_doc(&doc).page(0, |page| {
        page.collection_count(1).collection(0, |c| {
            c.is_group().event_count(1);
        });
    });
}

#[rstest]
#[case("section Launch\nendGroup\n", "Launch")]
#[case("section\nendSection\n", "")]
fn test_section_titles(#[case] source: &str, #[case] title: &str) {
    let doc = parse_document(source).unwrap();

    assert_doc(&doc).page(0, |page| {
        page.collection_count(1).collection(0, |c| {
            c.is_section().collapsed(false).title(title).event_count(0);
        });
    });
}

#[rstest]
#[case("group G", false)]
#[case(" group G", true)]
#[case("\tgroup G", true)]
fn test_group_collapsed_by_indent(#[case] marker: &str, #[case] collapsed: bool) {
    let doc = parse_document(&format!("{}\nendGroup\n", marker)).unwrap();

    assert_doc(&doc).page(0, |page| {
        page.collection(0, |c| {
            c.is_group().collapsed(collapsed).title("G");
        });
    });
}

#[test]
fn test_tags_shared_across_pages() {
    let source = "\
#Team: red
_-_-_break_-_-_
#Team: green // overrides page one
#Ops: blue
";
    let doc = parse_document(source).unwrap();

    assert_doc(&doc)
        .page_count(2)
        .tag_count(2)
        .tag("Team", "green")
        .tag("Ops", "blue");
}

#[test]
fn test_page_break_inherits_date_format() {
    let source = "\
dateFormat: d/M/y
_-_-_break_-_-_
13/01/2023: Inherited
_-_-_break_-_-_
dateFormat: MM/dd/yy
01/13/2023: Overridden
";
    let doc = parse_document(source).unwrap();

    assert_doc(&doc)
        .page_count(3)
        .page(0, |page| {
            page.date_format(DateFormat::DayMonthYear).collection_count(0);
        })
        .page(1, |page| {
            page.date_format(DateFormat::DayMonthYear)
                .collection(0, |c| {
                    c.event(0, |e| {
                        e.from_date(2023, 1, 13).to_date(2023, 1, 14);
                    });
                });
        })
        .page(2, |page| {
            page.date_format(DateFormat::MonthDayYear)
                .collection(0, |c| {
                    c.event(0, |e| {
                        e.from_date(2023, 1, 13);
                    });
                });
        });
}

#[test]
fn test_open_collection_flushed_at_page_break() {
    let source = "group Open\n01/01/2023: a\n_-_-_break_-_-_\n01/02/2023: b\n";
    let doc = parse_document(source).unwrap();

    assert_doc(&doc)
        .page(0, |page| {
            page.collection_count(1).collection(0, |c| {
                c.is_group().title("Open").event_count(1);
            });
        })
        .page(1, |page| {
            page.collection_count(1).collection(0, |c| {
                c.is_free().event_count(1);
            });
        });
}

#[test]
fn test_unknown_date_format_is_fatal() {
    let err = parse_document("dateFormat: yyyy/MM/dd\n01/01/2023: x\n").unwrap_err();
    assert_eq!(err.line_number, 1);
    assert_eq!(
        err.kind,
        ErrorKind::UnknownDateFormat {
            alias: "yyyy/MM/dd".to_string()
        }
    );
}

#[rstest]
#[case("just words", 1)]
#[case("title: ok\nendGroup\nno colon", 3)]
fn test_malformed_line_is_fatal(#[case] source: &str, #[case] line_number: usize) {
    let err = parse_document(source).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedLine);
    assert_eq!(err.line_number, line_number);
}

#[test]
fn test_malformed_tag_is_fatal() {
    let err = parse_document("#NoColor\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedTag);
}

#[test]
fn test_unparseable_date_reports_both_attempts() {
    let err = parse_document("sometime: maybe\n").unwrap_err();
    match err.kind {
        ErrorKind::DateRange { key, attempts } => {
            assert_eq!(key, "sometime");
            let strategies: Vec<_> = attempts.iter().map(|a| a.strategy).collect();
            assert_eq!(strategies, vec!["configured", "extended"]);
        }
        other => panic!("expected DateRange, got {:?}", other),
    }
}

#[test]
fn test_leading_header_policy_rejects_late_title() {
    let err = parse_document("group G\ntitle: Late\n").unwrap_err();
    assert_eq!(err.line_number, 2);
    assert!(matches!(err.kind, ErrorKind::DateRange { .. }));
}

#[test]
fn test_anywhere_header_policy_accepts_late_title() {
    let options = ParseOptions::new().with_header_policy(HeaderPolicy::Anywhere);
    let doc = parse_document_with_options("group G\ntitle: Late\nendGroup\n", options).unwrap();

    assert_doc(&doc).page(0, |page| {
        page.title("Late").collection_count(1);
    });
}

#[test]
fn test_comment_lines_are_ignored_everywhere() {
    let source = "\
// header comment
title: T // kept verbatim
  // indented comment
01/01/2023: One
// 01/02/2023: commented out event
";
    let doc = parse_document(source).unwrap();

    assert_doc(&doc).event_count(1).page(0, |page| {
        page.title("T // kept verbatim");
    });
}

#[rstest]
#[case("01/02/23: short year\n")]
#[case("23-02-01: short extended year\n")]
fn test_two_digit_year_is_fatal(#[case] source: &str) {
    let err = parse_document(source).unwrap_err();
    assert_eq!(err.line_number, 1);
    assert!(matches!(err.kind, ErrorKind::DateRange { .. }));
}

#[test]
fn test_group_start_drops_empty_open_group() {
    let doc = parse_document("group A\ngroup B\nendGroup\n").unwrap();

    assert_doc(&doc).page(0, |page| {
        page.collection_count(1).collection(0, |c| {
            c.is_group().title("B").event_count(0);
        });
    });
}

#[test]
fn test_section_start_keeps_open_group_with_events() {
    let doc = parse_document("group A\n01/01/2023: x\nsection S\nendSection\n").unwrap();

    assert_doc(&doc).page(0, |page| {
        page.collection_count(2)
            .collection(0, |c| {
                c.is_group().title("A").event_count(1);
            })
            .collection(1, |c| {
                c.is_section().title("S").event_count(0);
            });
    });
}
