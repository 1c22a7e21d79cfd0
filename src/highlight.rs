use std::sync::LazyLock;

use regex::Regex;

/// The fixed set of language tags the code window knows how to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Javascript,
    Python,
    Html,
    Css,
    Java,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Javascript,
        Language::Python,
        Language::Html,
        Language::Css,
        Language::Java,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Html => "html",
            Language::Css => "css",
            Language::Java => "java",
        }
    }

    /// An unrecognized tag yields `None`; the caller then highlights with the
    /// generic rules only.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "javascript" | "js" => Some(Language::Javascript),
            "python" | "py" => Some(Language::Python),
            "html" => Some(Language::Html),
            "css" => Some(Language::Css),
            "java" => Some(Language::Java),
            _ => None,
        }
    }
}

type Rules = Vec<(Regex, &'static str)>;

fn rule(pattern: &str, class: &'static str) -> (Regex, &'static str) {
    let re = Regex::new(pattern).unwrap_or_else(|e| panic!("bad highlight rule {pattern:?}: {e}"));
    (re, class)
}

// Generic rules run before any language-specific ones: comments, quoted
// strings, numeric literals.
static GENERIC_RULES: LazyLock<Rules> = LazyLock::new(|| {
    vec![
        rule(r"//[^\n]*|/\*(?s:.*?)\*/", "comment"),
        rule(r#"`[^`\n]*`|'[^'\n]*'|"[^"\n]*""#, "string"),
        rule(r"\b\d+\.?\d*\b", "number"),
    ]
});

static JAVASCRIPT_RULES: LazyLock<Rules> = LazyLock::new(|| {
    vec![
        rule(
            r"\b(function|const|let|var|return|if|else|for|while|class|export|import|async|await|try|catch|finally)\b",
            "keyword",
        ),
        rule(r"\b(true|false|null|undefined|NaN|Infinity)\b", "literal"),
        rule(r"\b(console|window|document|module|require)\b", "builtin"),
    ]
});

static PYTHON_RULES: LazyLock<Rules> = LazyLock::new(|| {
    vec![
        rule(
            r"\b(def|class|return|if|elif|else|for|while|try|except|finally|with|import|from|as|lambda)\b",
            "keyword",
        ),
        rule(r"\b(True|False|None)\b", "literal"),
        rule(
            r"\b(print|len|range|str|int|list|dict|tuple|set)\b",
            "builtin",
        ),
    ]
});

static HTML_RULES: LazyLock<Rules> = LazyLock::new(|| {
    vec![
        rule(r"</?[a-zA-Z][a-zA-Z0-9-]*|/?>", "tag"),
        rule(r"\s[a-zA-Z-]+=", "attribute"),
    ]
});

static CSS_RULES: LazyLock<Rules> = LazyLock::new(|| {
    vec![
        rule(r"\b[a-zA-Z-]+\s*:", "property"),
        rule(r"[#.][a-zA-Z][a-zA-Z0-9_-]*", "selector"),
    ]
});

static JAVA_RULES: LazyLock<Rules> = LazyLock::new(|| {
    vec![
        rule(
            r"\b(public|private|protected|class|static|void|int|String|boolean|new|this|super|extends|implements)\b",
            "keyword",
        ),
        rule(r"\b(true|false|null)\b", "literal"),
        rule(r"\b(System|out|println|main)\b", "builtin"),
    ]
});

fn language_rules(lang: Language) -> &'static Rules {
    match lang {
        Language::Javascript => &JAVASCRIPT_RULES,
        Language::Python => &PYTHON_RULES,
        Language::Html => &HTML_RULES,
        Language::Css => &CSS_RULES,
        Language::Java => &JAVA_RULES,
    }
}

/// Highlight `text` for a language tag. Pure and deterministic: the same
/// `(text, tag)` always produces identical markup.
pub fn highlight(text: &str, tag: &str) -> String {
    highlight_lang(text, Language::from_tag(tag))
}

/// Highlight with an already-resolved language. Matches are claimed over the
/// raw text in rule order, generic rules before language-specific ones,
/// and a later rule never tears apart a span claimed by an earlier one.
/// Markup-sensitive characters are escaped before anything is wrapped.
pub fn highlight_lang(text: &str, lang: Option<Language>) -> String {
    let mut spans: Vec<(usize, usize, &'static str)> = Vec::new();

    let generic = GENERIC_RULES.iter();
    let specific = lang.map(|l| language_rules(l).iter());
    for (re, class) in generic.chain(specific.into_iter().flatten()) {
        for m in re.find_iter(text) {
            if m.start() == m.end() {
                continue;
            }
            let overlaps = spans
                .iter()
                .any(|&(start, end, _)| m.start() < end && start < m.end());
            if !overlaps {
                spans.push((m.start(), m.end(), class));
            }
        }
    }
    spans.sort_unstable_by_key(|&(start, _, _)| start);

    let mut out = String::with_capacity(text.len() + spans.len() * 24);
    let mut pos = 0;
    for (start, end, class) in spans {
        push_escaped(&mut out, &text[pos..start]);
        out.push_str("<span class=\"");
        out.push_str(class);
        out.push_str("\">");
        push_escaped(&mut out, &text[start..end]);
        out.push_str("</span>");
        pos = end;
    }
    push_escaped(&mut out, &text[pos..]);
    out
}

/// Escape the characters that would otherwise be parsed as markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_same_input() {
        let src = "const x = 42; // answer";
        let a = highlight(src, "javascript");
        let b = highlight(src, "javascript");
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_tag_keeps_generic_rules_only() {
        let src = "let x = 'hi' // 7";
        let out = highlight(src, "cobol");
        assert!(out.contains("<span class=\"string\">'hi'</span>"));
        assert!(out.contains("<span class=\"comment\">// 7</span>"));
        // no language-specific wrapping without a recognized tag
        assert!(!out.contains("keyword"));
    }

    #[test]
    fn escapes_before_wrapping() {
        let out = highlight("a < b && c > d", "nope");
        assert!(out.contains("&lt;"));
        assert!(out.contains("&gt;"));
        assert!(out.contains("&amp;&amp;"));
        assert!(!out.contains("< b"));
    }

    #[test]
    fn javascript_keywords_literals_builtins() {
        let src = "function greet() { console.log(true); return null; }";
        let out = highlight(src, "javascript");
        assert!(out.contains("<span class=\"keyword\">function</span>"));
        assert!(out.contains("<span class=\"keyword\">return</span>"));
        assert!(out.contains("<span class=\"builtin\">console</span>"));
        assert!(out.contains("<span class=\"literal\">true</span>"));
        assert!(out.contains("<span class=\"literal\">null</span>"));
    }

    #[test]
    fn python_rules_apply() {
        let src = "def greet():\n    print(True)";
        let out = highlight(src, "python");
        assert!(out.contains("<span class=\"keyword\">def</span>"));
        assert!(out.contains("<span class=\"builtin\">print</span>"));
        assert!(out.contains("<span class=\"literal\">True</span>"));
    }

    #[test]
    fn html_tags_and_attributes() {
        let src = "<body class=\"main\"><h1>Hi</h1></body>";
        let out = highlight(src, "html");
        assert!(out.contains("<span class=\"tag\">&lt;body</span>"));
        assert!(out.contains("<span class=\"tag\">&lt;/h1</span>"));
        assert!(out.contains("<span class=\"attribute\"> class=</span>"));
    }

    #[test]
    fn css_properties_and_selectors() {
        let src = ".hero { color: red; }\n#app { margin: 0; }";
        let out = highlight(src, "css");
        assert!(out.contains("<span class=\"selector\">.hero</span>"));
        assert!(out.contains("<span class=\"selector\">#app</span>"));
        assert!(out.contains("<span class=\"property\">color:</span>"));
    }

    #[test]
    fn java_rules_apply() {
        let src = "public static void main(String[] args) { System.out.println(1); }";
        let out = highlight(src, "java");
        assert!(out.contains("<span class=\"keyword\">public</span>"));
        assert!(out.contains("<span class=\"keyword\">void</span>"));
        assert!(out.contains("<span class=\"builtin\">System</span>"));
        assert!(out.contains("<span class=\"number\">1</span>"));
    }

    #[test]
    fn earlier_rules_win_on_overlap() {
        // "class" inside a string stays a string; the keyword rule must not
        // reach into a claimed range.
        let src = "const s = \"class\";";
        let out = highlight(src, "javascript");
        assert!(out.contains("<span class=\"string\">\"class\"</span>"));
        assert!(out.contains("<span class=\"keyword\">const</span>"));
        assert!(!out.contains("<span class=\"keyword\">class</span>"));
    }

    #[test]
    fn comment_swallows_code_inside_it() {
        let src = "// const hidden = 1";
        let out = highlight(src, "javascript");
        assert_eq!(out, "<span class=\"comment\">// const hidden = 1</span>");
    }

    #[test]
    fn numbers_wrapped() {
        let out = highlight("x = 3.14 + 7", "nope");
        assert!(out.contains("<span class=\"number\">3.14</span>"));
        assert!(out.contains("<span class=\"number\">7</span>"));
    }

    #[test]
    fn tag_aliases_resolve() {
        assert_eq!(Language::from_tag("js"), Some(Language::Javascript));
        assert_eq!(Language::from_tag("py"), Some(Language::Python));
        assert_eq!(Language::from_tag("fortran"), None);
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(lang.tag()), Some(lang));
        }
    }
}
