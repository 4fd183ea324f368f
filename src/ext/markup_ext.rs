/// Removes inline tags such as `<span class="...">`, `</span>` and `<img .../>`.
///
/// A `<` only opens a tag when followed by a letter, `/` or `!`, so text like
/// `<3` survives. An unterminated tag is kept as text.
pub fn strip_markup(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let opens_tag = after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!');

        match after.find('>') {
            Some(end) if opens_tag => {
                stripped.push_str(&rest[..start]);
                rest = &after[end + 1..];
            }
            _ => {
                stripped.push_str(&rest[..=start]);
                rest = after;
            }
        }
    }

    stripped.push_str(rest);
    stripped
}

pub trait MarkupExt {
    fn strip_markup(&self) -> String;
}

impl MarkupExt for str {
    fn strip_markup(&self) -> String {
        strip_markup(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(r#"<span class="text-dark-red">Hi Lyds, <3</span>"#, "Hi Lyds, <3")]
    #[case(
        "Run one with <span class='text-dark-green'>./[program].exe</span>",
        "Run one with ./[program].exe"
    )]
    #[case("<img \n  src=\"/ascii-art.png\" \n  alt=\"signature\"/>", "")]
    #[case("a < b and c > d", "a < b and c > d")]
    #[case("unterminated <span", "unterminated <span")]
    #[case("plain text", "plain text")]
    #[case("", "")]
    fn strips_tags_only(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(input.strip_markup(), expected);
    }
}
