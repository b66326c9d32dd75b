//! Snapshot tests for the tree output formats

use pathglob::pattern::formats::{format_at_position, serialize_tag, to_treeviz_str};
use pathglob::pattern::parser::parse;

const SAMPLE: &str = "/a-***?-b-[]a\\]/*?a]-c-[\\]-d-\\*\\?\\[/";

#[test]
fn treeviz_sample_pattern() {
    let tree = parse(SAMPLE).unwrap();
    insta::assert_snapshot!(to_treeviz_str(&tree), @r"
    ├─ HeadingSlash: /
    ├─ Text: a-
    ├─ MatchAll: **
    ├─ MatchMultiple: *
    ├─ MatchOne: ?
    ├─ Text: -b-
    ├─ CharClass: []a\]/*?a]
    │ └─ CharClassBody: ]a\]/*?a
    │   └─ EscapedCharClassEnd: \]
    ├─ Text: -c-
    ├─ CharClass: [\]
    │ └─ CharClassBody: \
    ├─ Text: -d-
    ├─ EscapedAsterisk: \*
    ├─ EscapedQuestionMark: \?
    ├─ EscapedCharClassStart: \[
    └─ Text: /
    ");
}

#[test]
fn tag_nested_class() {
    let tree = parse("/x[]\\]]").unwrap();
    insta::assert_snapshot!(serialize_tag(&tree), @r"
    <pattern>
      <heading-slash>/</heading-slash>
      <text>x</text>
      <char-class>
        <char-class-start>[</char-class-start>
        <char-class-body>
          <char-class-end>]</char-class-end>
          <escaped-char-class-end>\]</escaped-char-class-end>
        </char-class-body>
        <char-class-end>]</char-class-end>
      </char-class>
    </pattern>
    ");
}

#[test]
fn tag_escapes_markup_characters() {
    let tree = parse("<a&b>*").unwrap();
    insta::assert_snapshot!(serialize_tag(&tree), @r"
    <pattern>
      <text>&lt;a&amp;b&gt;</text>
      <match-multiple>*</match-multiple>
    </pattern>
    ");
}

#[test]
fn position_inside_class() {
    let tree = parse("a[b\\]c]").unwrap();
    insta::assert_snapshot!(format_at_position(&tree, 3).unwrap(), @r"
    1. Pattern [0..7): a[b\]c]
    2. CharClass [1..7): [b\]c]
    3. CharClassBody [2..6): b\]c
    4. EscapedCharClassEnd [3..5): \]
    ");
}
