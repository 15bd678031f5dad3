use std::borrow::Cow;

use crate::ast::{AstArena, CommentGroupId, CommentKind, IdentName, Interner, SourceFile, StringLit};
use crate::walk::Visitor;

/// One parsed file: its node arena, the interner its symbols point into, and
/// the root node.
#[derive(Debug)]
pub struct SyntaxTree {
    pub arena: AstArena,
    pub interner: Interner,
    pub root: SourceFile,
}

impl SyntaxTree {
    /// Name from the `package` clause.
    pub fn package_name(&self) -> &str {
        self.name(self.root.name)
    }

    #[inline]
    pub fn name(&self, ident: IdentName) -> &str {
        self.interner.resolve(ident.sym)
    }

    /// Value of a string literal.
    ///
    /// Interpreted literals have their escape sequences decoded; escapes Go
    /// would reject are kept as written. Raw literals lose only their
    /// carriage returns.
    pub fn unquote(&self, lit: StringLit) -> Cow<'_, str> {
        let raw = self.interner.resolve(lit.value);
        if let Some(inner) = raw.strip_prefix('`').and_then(|s| s.strip_suffix('`')) {
            return if inner.contains('\r') {
                Cow::Owned(inner.replace('\r', ""))
            } else {
                Cow::Borrowed(inner)
            };
        }
        match raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
            Some(inner) if inner.contains('\\') => Cow::Owned(unescape(inner)),
            Some(inner) => Cow::Borrowed(inner),
            None => Cow::Borrowed(raw),
        }
    }

    /// Text of a comment group with comment markers removed, one line per
    /// source line. Returns `None` for absent or blank groups.
    pub fn doc_text(&self, group: Option<CommentGroupId>) -> Option<String> {
        let group = self.arena.comment_groups[group?];
        let mut lines: Vec<&str> = Vec::new();
        for &id in self.arena.comment_ids(group.comments) {
            let comment = self.arena.comments[id];
            let raw = self.interner.resolve(comment.text);
            match comment.kind {
                CommentKind::Line => {
                    let body = raw.strip_prefix("//").unwrap_or(raw);
                    lines.push(body.strip_prefix(' ').unwrap_or(body).trim_end());
                }
                CommentKind::Block => {
                    let body = raw.strip_prefix("/*").unwrap_or(raw);
                    let body = body.strip_suffix("*/").unwrap_or(body);
                    lines.extend(body.lines().map(str::trim));
                }
            }
        }
        while lines.first().is_some_and(|l| l.is_empty()) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    /// Runs `v` over the whole file.
    pub fn walk<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, v: &mut V) {
        v.visit_source_file(&self.arena, &self.root);
    }
}

fn unescape(s: &str) -> String {
    let mut out = Vec::with_capacity(s.len());
    let mut rest = s;
    while let Some(i) = rest.find('\\') {
        out.extend_from_slice(&rest.as_bytes()[..i]);
        rest = &rest[i + 1..];
        let simple = match rest.as_bytes().first() {
            Some(b'a') => Some(0x07),
            Some(b'b') => Some(0x08),
            Some(b'f') => Some(0x0c),
            Some(b'n') => Some(b'\n'),
            Some(b'r') => Some(b'\r'),
            Some(b't') => Some(b'\t'),
            Some(b'v') => Some(0x0b),
            Some(&b @ (b'\\' | b'\'' | b'"')) => Some(b),
            _ => None,
        };
        if let Some(b) = simple {
            out.push(b);
            rest = &rest[1..];
        } else if let Some(used) = numeric_escape(rest, &mut out) {
            rest = &rest[used..];
        } else {
            out.push(b'\\');
        }
    }
    out.extend_from_slice(rest.as_bytes());
    // `\xHH` and octal escapes are bytes and may not form UTF-8.
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Decodes a leading `xHH`, `ooo`, `uHHHH` or `UHHHHHHHH` into `out` and
/// returns the bytes consumed.
fn numeric_escape(s: &str, out: &mut Vec<u8>) -> Option<usize> {
    let (skip, radix, digits) = match *s.as_bytes().first()? {
        b'x' => (1, 16, 2),
        b'u' => (1, 16, 4),
        b'U' => (1, 16, 8),
        b'0'..=b'7' => (0, 8, 3),
        _ => return None,
    };
    let text = s.get(skip..skip + digits)?;
    if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(text, radix).ok()?;
    if skip == 1 && digits > 2 {
        let c = char::from_u32(value)?;
        out.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes());
    } else {
        out.push(u8::try_from(value).ok()?);
    }
    Some(skip + digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::TreeBuilder;

    /// Tree holding one struct field tagged with `raw`, and that tag.
    fn tagged(raw: &str) -> (SyntaxTree, StringLit) {
        let mut b = TreeBuilder::new("p");
        let int = b.named("int");
        let f = b.tagged_field(&["X"], int, raw);
        let tree = b.finish();
        let tag = tree.arena.fields[f].tag.unwrap();
        (tree, tag)
    }

    fn unquoted(raw: &str) -> String {
        let (tree, tag) = tagged(raw);
        tree.unquote(tag).into_owned()
    }

    #[test]
    fn interpreted_literals_are_unescaped() {
        assert_eq!(unquoted(r#""json:\"x\"""#), r#"json:"x""#);
        assert_eq!(unquoted(r#""a\tb\\c""#), "a\tb\\c");
        assert_eq!(unquoted(r#""\x41\101\u00e9\U0001F600""#), "AA\u{e9}\u{1F600}");
    }

    #[test]
    fn invalid_escapes_are_kept() {
        assert_eq!(unquoted(r#""\q""#), r"\q");
        assert_eq!(unquoted(r#""\x4""#), r"\x4");
        assert_eq!(unquoted(r#""\777""#), r"\777");
        assert_eq!(unquoted(r#""\uD800""#), r"\uD800");
    }

    #[test]
    fn raw_literals_borrow_their_text() {
        let (tree, tag) = tagged(r#"`json:"x" db:"\n"`"#);
        assert!(matches!(tree.unquote(tag), Cow::Borrowed(r#"json:"x" db:"\n""#)));
        assert_eq!(unquoted("`a\r\nb`"), "a\nb");
    }
}
