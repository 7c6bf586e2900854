//! Document content parsing (word/document.xml)
//!
//! Extracts the body-level paragraphs of a document together with their
//! style reference and formatted runs. Paragraphs nested in tables, text
//! boxes or content controls are not part of the body sequence.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::archive::DOCUMENT_PART;
use crate::error::{OoxmlError, Result};
use crate::styles::get_attr;

/// A parsed Word document
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Body-level paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

/// A paragraph with its style reference and runs
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    /// Style ID (references styles.xml)
    pub style_id: Option<String>,
    /// Runs in order, including those inside hyperlinks
    pub runs: Vec<Run>,
}

/// A text run with formatting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    /// The text content
    pub text: String,
    /// Whether the text is bold
    pub bold: bool,
    /// Whether the text is italic
    pub italic: bool,
}

impl Document {
    /// Parse a document from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        // Don't trim text - preserve whitespace in runs
        reader.config_mut().trim_text(false);

        let mut paragraphs = Vec::new();
        let mut buf = Vec::new();

        // Local names of the currently open elements
        let mut stack: Vec<Vec<u8>> = Vec::new();
        // Stack depth at which the current body paragraph was opened
        let mut para_depth: Option<usize> = None;
        // Stack depth at which the current run was opened
        let mut run_depth: Option<usize> = None;
        let mut current_para: Option<Paragraph> = None;
        let mut current_run: Option<Run> = None;
        let mut in_text_element = false;

        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| OoxmlError::xml(DOCUMENT_PART, e))?;

            match event {
                Event::Start(ref e) => {
                    let name = e.local_name().as_ref().to_vec();
                    let parent = stack.last().map(|p| p.as_slice());

                    match name.as_slice() {
                        b"p" if matches!(parent, Some(b"body")) => {
                            current_para = Some(Paragraph::default());
                            para_depth = Some(stack.len() + 1);
                        }
                        b"r" if current_run.is_none() && is_paragraph_run(parent, para_depth, stack.len()) => {
                            current_run = Some(Run::default());
                            run_depth = Some(stack.len() + 1);
                        }
                        b"t" if current_run.is_some() && run_depth == Some(stack.len()) => {
                            in_text_element = true;
                        }
                        _ => {
                            apply_leaf(e, parent, &mut current_para, &mut current_run, para_depth, run_depth, stack.len());
                        }
                    }

                    stack.push(name);
                }
                Event::Empty(ref e) => {
                    let parent = stack.last().map(|p| p.as_slice());
                    match e.local_name().as_ref() {
                        b"p" if matches!(parent, Some(b"body")) => {
                            paragraphs.push(Paragraph::default());
                        }
                        b"r" if current_run.is_none() && is_paragraph_run(parent, para_depth, stack.len()) => {
                            if let Some(para) = current_para.as_mut() {
                                para.runs.push(Run::default());
                            }
                        }
                        _ => {
                            apply_leaf(e, parent, &mut current_para, &mut current_run, para_depth, run_depth, stack.len());
                        }
                    }
                }
                Event::Text(ref e) => {
                    if in_text_element {
                        if let Some(run) = current_run.as_mut() {
                            let text = e.unescape().map_err(|err| OoxmlError::xml(DOCUMENT_PART, err))?;
                            run.text.push_str(&text);
                        }
                    }
                }
                Event::End(ref e) => {
                    stack.pop();
                    match e.local_name().as_ref() {
                        b"t" if run_depth == Some(stack.len()) => in_text_element = false,
                        b"r" if run_depth == Some(stack.len() + 1) => {
                            if let (Some(run), Some(para)) = (current_run.take(), current_para.as_mut()) {
                                para.runs.push(run);
                            }
                            run_depth = None;
                        }
                        b"p" if para_depth == Some(stack.len() + 1) => {
                            if let Some(para) = current_para.take() {
                                paragraphs.push(para);
                            }
                            para_depth = None;
                        }
                        _ => {}
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(Document { paragraphs })
    }

    /// Get plain text content: paragraph texts joined by line breaks
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Paragraph {
    /// Get the text of this paragraph
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A run belongs to the body paragraph when it is a direct child of the
/// paragraph or of one of the paragraph's own hyperlinks
fn is_paragraph_run(parent: Option<&[u8]>, para_depth: Option<usize>, depth: usize) -> bool {
    match (parent, para_depth) {
        (Some(b"p"), Some(p)) => depth == p,
        (Some(b"hyperlink"), Some(p)) => depth == p + 1,
        _ => false,
    }
}

/// Handle leaf elements that carry paragraph or run properties, plus the
/// run content elements that stand in for characters
///
/// Run content only counts at the current run's own depth, so text boxes
/// and other nested content inside a run are skipped.
fn apply_leaf(
    e: &BytesStart,
    parent: Option<&[u8]>,
    current_para: &mut Option<Paragraph>,
    current_run: &mut Option<Run>,
    para_depth: Option<usize>,
    run_depth: Option<usize>,
    depth: usize,
) {
    let in_run = run_depth == Some(depth);
    let in_run_props = matches!(parent, Some(b"rPr")) && run_depth.map(|d| d + 1) == Some(depth);

    match e.local_name().as_ref() {
        b"pStyle" => {
            // Only the paragraph's own pPr, not a nested paragraph's
            if matches!(parent, Some(b"pPr")) && para_depth.map(|d| d + 1) == Some(depth) {
                if let Some(para) = current_para.as_mut() {
                    para.style_id = get_attr(e, b"w:val");
                }
            }
        }
        b"b" if in_run_props => {
            if let Some(run) = current_run.as_mut() {
                run.bold = is_on(e);
            }
        }
        b"i" if in_run_props => {
            if let Some(run) = current_run.as_mut() {
                run.italic = is_on(e);
            }
        }
        b"tab" if in_run => {
            if let Some(run) = current_run.as_mut() {
                run.text.push('\t');
            }
        }
        b"br" if in_run => {
            // Page and column breaks carry no text
            if is_line_break(e) {
                if let Some(run) = current_run.as_mut() {
                    run.text.push('\n');
                }
            }
        }
        b"cr" if in_run => {
            if let Some(run) = current_run.as_mut() {
                run.text.push('\n');
            }
        }
        _ => {}
    }
}

fn is_line_break(e: &BytesStart) -> bool {
    matches!(get_attr(e, b"w:type").as_deref(), None | Some("textWrapping"))
}

/// Toggle properties are on unless `w:val` switches them off
fn is_on(e: &BytesStart) -> bool {
    !matches!(get_attr(e, b"w:val").as_deref(), Some("0" | "false" | "off"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::document_with_body;

    fn parse_body(body: &str) -> Document {
        Document::parse(document_with_body(body).as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_simple_paragraph() {
        let doc = parse_body("<w:p><w:r><w:t>Hello, world!</w:t></w:r></w:p>");
        assert_eq!(doc.paragraphs.len(), 1);
        assert_eq!(doc.plain_text(), "Hello, world!");
        assert!(doc.paragraphs[0].style_id.is_none());
    }

    #[test]
    fn test_parse_styled_paragraph() {
        let doc = parse_body(
            r#"<w:p><w:pPr><w:pStyle w:val="ListBullet"/></w:pPr><w:r><w:t>Item</w:t></w:r></w:p>"#,
        );
        assert_eq!(doc.paragraphs[0].style_id.as_deref(), Some("ListBullet"));
    }

    #[test]
    fn test_parse_run_with_formatting() {
        let doc = parse_body(
            r#"<w:p>
                <w:r><w:rPr><w:b/><w:i/></w:rPr><w:t>Bold and italic</w:t></w:r>
                <w:r><w:rPr><w:b w:val="0"/><w:i w:val="false"/></w:rPr><w:t>Plain</w:t></w:r>
                <w:r><w:rPr><w:b w:val="off"/></w:rPr><w:t>Also plain</w:t></w:r>
            </w:p>"#,
        );
        let runs = &doc.paragraphs[0].runs;
        assert_eq!(runs.len(), 3);
        assert!(runs[0].bold && runs[0].italic);
        assert!(!runs[1].bold && !runs[1].italic);
        assert!(!runs[2].bold);
    }

    #[test]
    fn test_paragraph_mark_properties_are_not_run_formatting() {
        let doc = parse_body(
            r#"<w:p><w:pPr><w:rPr><w:b/></w:rPr></w:pPr><w:r><w:t>Normal text</w:t></w:r></w:p>"#,
        );
        assert!(!doc.paragraphs[0].runs[0].bold);
    }

    #[test]
    fn test_preserves_whitespace_between_runs() {
        let doc = parse_body(
            r#"<w:p><w:r><w:t xml:space="preserve">Read </w:t></w:r><w:r><w:t>the guide</w:t></w:r></w:p>"#,
        );
        assert_eq!(doc.paragraphs[0].text(), "Read the guide");
    }

    #[test]
    fn test_tabs_and_breaks() {
        let doc = parse_body(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>One</w:t><w:tab/><w:t>Two</w:t><w:br/><w:t>Three</w:t></w:r></w:p>"#,
        );
        assert_eq!(doc.paragraphs[0].text(), "One\tTwo\nThree");
    }

    #[test]
    fn test_ignore_field_codes() {
        let doc = parse_body(
            r#"<w:p>
                <w:r><w:fldChar w:fldCharType="begin"/></w:r>
                <w:r><w:instrText>TOC \o "1-3"</w:instrText></w:r>
                <w:r><w:fldChar w:fldCharType="separate"/></w:r>
                <w:r><w:t>Table of Contents</w:t></w:r>
                <w:r><w:fldChar w:fldCharType="end"/></w:r>
            </w:p>"#,
        );
        assert_eq!(doc.plain_text(), "Table of Contents");
    }

    #[test]
    fn test_hyperlink_runs_are_included() {
        let doc = parse_body(
            r#"<w:p><w:r><w:t xml:space="preserve">See </w:t></w:r><w:hyperlink w:anchor="x"><w:r><w:rPr><w:i/></w:rPr><w:t>the guide</w:t></w:r></w:hyperlink></w:p>"#,
        );
        let para = &doc.paragraphs[0];
        assert_eq!(para.text(), "See the guide");
        assert_eq!(para.runs.len(), 2);
        assert!(!para.runs[0].italic);
        assert!(para.runs[1].italic);
    }

    #[test]
    fn test_text_box_inside_run_is_skipped() {
        let doc = parse_body(
            r#"<w:p><w:r><w:t xml:space="preserve">Outer start </w:t><w:pict><w:txbxContent><w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Box text</w:t></w:r></w:p></w:txbxContent></w:pict><w:t>outer end</w:t></w:r></w:p>"#,
        );
        assert_eq!(doc.paragraphs.len(), 1);
        let para = &doc.paragraphs[0];
        assert_eq!(para.text(), "Outer start outer end");
        assert_eq!(para.runs.len(), 1);
        assert!(!para.runs[0].bold);
    }

    #[test]
    fn test_alternate_content_text_box_is_skipped() {
        let doc = parse_body(
            r#"<w:p><w:r><w:t>Before</w:t></w:r><w:r><mc:AlternateContent xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006"><mc:Choice Requires="wps"><w:drawing><w:txbxContent><w:p><w:r><w:t>Box</w:t></w:r></w:p></w:txbxContent></w:drawing></mc:Choice><mc:Fallback><w:pict><w:txbxContent><w:p><w:r><w:t>Box</w:t></w:r></w:p></w:txbxContent></w:pict></mc:Fallback></mc:AlternateContent></w:r><w:r><w:rPr><w:i/></w:rPr><w:t xml:space="preserve"> after</w:t></w:r></w:p>"#,
        );
        let para = &doc.paragraphs[0];
        assert_eq!(para.text(), "Before after");
        assert_eq!(para.runs.len(), 3);
        assert!(para.runs[2].italic);
    }

    #[test]
    fn test_page_and_column_breaks_add_no_text() {
        let doc = parse_body(
            r#"<w:p><w:r><w:t>One</w:t><w:br w:type="page"/><w:t>Two</w:t><w:br w:type="column"/><w:t>Three</w:t><w:br w:type="textWrapping"/><w:t>Four</w:t><w:cr/><w:t>Five</w:t></w:r></w:p>"#,
        );
        assert_eq!(doc.paragraphs[0].text(), "OneTwoThree\nFour\nFive");
    }

    #[test]
    fn test_table_paragraphs_are_not_body_paragraphs() {
        let doc = parse_body(
            r#"<w:p><w:r><w:t>Before</w:t></w:r></w:p>
               <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
               <w:p><w:r><w:t>After</w:t></w:r></w:p>"#,
        );
        assert_eq!(doc.paragraphs.len(), 2);
        assert_eq!(doc.plain_text(), "Before\nAfter");
    }

    #[test]
    fn test_empty_paragraphs_are_kept() {
        let doc = parse_body(r#"<w:p/><w:p><w:r><w:t>Text</w:t></w:r></w:p><w:p></w:p>"#);
        assert_eq!(doc.paragraphs.len(), 3);
        assert_eq!(doc.plain_text(), "\nText\n");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let doc = parse_body("<w:p><w:r><w:t>Tea &amp; biscuits</w:t></w:r></w:p>");
        assert_eq!(doc.plain_text(), "Tea & biscuits");
    }

    #[test]
    fn test_typographic_apostrophe_survives() {
        let doc = parse_body("<w:p><w:r><w:t>It isn\u{2019}t ready</w:t></w:r></w:p>");
        assert_eq!(doc.plain_text(), "It isn\u{2019}t ready");
    }

    #[test]
    fn test_parse_empty_document() {
        let doc = parse_body("");
        assert!(doc.paragraphs.is_empty());
        assert_eq!(doc.plain_text(), "");
    }

    #[test]
    fn test_malformed_xml() {
        let err = Document::parse(b"<w:document><w:body><w:p></w:body>").unwrap_err();
        assert!(matches!(err, OoxmlError::Xml { part, .. } if part == DOCUMENT_PART));
    }
}
