use pulldown_cmark::{Options, Parser, html};

/// Markdown rendering
///
/// Pure function from Markdown-flavored text to an HTML fragment, standard
/// CommonMark rules only. Both panes (original and translated) render
/// through this.
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
