//! Text escaping for element content and attribute values

/// Entity references that an `&` may already start; these are left alone.
///
/// `&amp;` is deliberately absent, so `&amp;` in the input becomes `&amp;amp;`.
const ENCODED: [&str; 3] = ["lt;", "gt;", "quot;"];

/// Escape `<`, `>` and any `&` that does not begin `&lt;`, `&gt;` or `&quot;`
pub fn escape(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    escape_into(input, &mut output);
    output
}

/// Same as [`escape`], appending to `output`
pub fn escape_into(input: &str, output: &mut String) {
    for (idx, ch) in input.char_indices() {
        match ch {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '&' => {
                let rest = input.get(idx + 1..).unwrap_or_default();
                if ENCODED.iter().any(|entity| rest.starts_with(entity)) {
                    output.push('&');
                } else {
                    output.push_str("&amp;");
                }
            }
            _ => output.push(ch),
        }
    }
}

/// Wrap `data` in a CDATA section without escaping it
pub fn cdata(data: &str) -> String {
    format!("<![CDATA[{data}]]>")
}
