use crate::parsers::html;
use crate::results::ScrapedPage;

fn assert_bounded(page: &ScrapedPage) {
    assert!(page.h2_list.len() <= 5);
    assert!(page.cta_texts.len() <= 10);
    assert!(page.main_text.chars().count() <= 3000);
    assert!(page.h2_list.iter().all(|h| !h.is_empty()));
    assert!(page.cta_texts.iter().all(|c| !c.is_empty()));
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_head_elements_outside_body_are_tolerated() {
        let doc = r#"<title>T</title><h1>Hi</h1><h2>A</h2><h2>B</h2><meta name="description" content="D"><button>Click</button><body>Hello world</body>"#;
        let page = html::extract(doc);

        assert_eq!(page.title, "T");
        assert_eq!(page.h1, "Hi");
        assert_eq!(page.h2_list, vec!["A", "B"]);
        assert_eq!(page.meta_description, "D");
        assert_eq!(page.cta_texts, vec!["Click"]);
        assert!(page.main_text.contains("Hello world"));
    }

    #[test]
    fn test_realistic_landing_page() {
        let doc = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Ship faster | Launchpad</title>
  <meta name="description" content="Launchpad deploys your app in seconds.">
  <script src="/app.js"></script>
  <script>window.dataLayer = window.dataLayer || [];</script>
</head>
<body>
  <nav><a href="/">Home</a><a class="btn" href="/signup">Start free trial</a></nav>
  <header>
    <h1>Deploy in seconds, not hours</h1>
    <p>Push to git and we handle the rest.</p>
    <button type="button">Watch demo</button>
  </header>
  <section><h2>Why Launchpad</h2><p>Zero config builds.</p></section>
  <section><h2>Pricing</h2><p>Free for hobby projects.</p></section>
  <div class="ad">Buy cheap hosting now!</div>
  <form><input type="email" name="email"><input type="submit" value="Join waitlist"></form>
</body>
</html>"##;
        let page = html::extract(doc);

        assert_eq!(page.title, "Ship faster | Launchpad");
        assert_eq!(page.meta_description, "Launchpad deploys your app in seconds.");
        assert_eq!(page.h1, "Deploy in seconds, not hours");
        assert_eq!(page.h2_list, vec!["Why Launchpad", "Pricing"]);
        assert_eq!(
            page.cta_texts,
            vec!["Start free trial", "Watch demo", "Join waitlist"]
        );
        assert!(page.main_text.starts_with("HomeStart free trial Deploy in seconds"));
        assert!(page.main_text.ends_with("Free for hobby projects."));
        assert!(!page.main_text.contains("dataLayer"));
        assert!(!page.main_text.contains("cheap hosting"));
    }
}

#[cfg(test)]
mod robustness_tests {
    use super::*;

    #[test]
    fn test_degenerate_inputs_never_panic() {
        let inputs = [
            "",
            "   ",
            "just plain text, no markup at all",
            "{\"json\": true}",
            "<<<>>><<>>",
            "<div><p><b>unclosed <h2>Heading<table><td>cell</div></span></i>",
            "<html><html><body><body><h1>dup</h1></body>",
            "<h2>a</h2><script>never closed",
            "<style>",
            "<!-- unterminated comment",
            "<meta name=\"description\" content=\"x",
            "\u{0000}\u{FFFD}<h1>\u{0007}</h1>",
            "</body></html><h1>after close</h1>",
        ];

        for input in inputs {
            let page = html::extract(input);
            assert_bounded(&page);
        }
    }

    #[test]
    fn test_plain_text_becomes_main_text() {
        let page = html::extract("just plain text,\n no markup at all");
        assert_eq!(page.main_text, "just plain text, no markup at all");
        assert_eq!(page.title, "");
        assert_eq!(page.h1, "");
        assert!(page.h2_list.is_empty());
        assert!(page.cta_texts.is_empty());
    }

    #[test]
    fn test_unclosed_script_swallows_rest_of_document() {
        let page = html::extract("<p>before</p><script>var x = '<h2>not a heading</h2>';");
        assert_eq!(page.main_text, "before");
        assert!(page.h2_list.is_empty());
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 2000;
        let doc = format!(
            "{}<h2>deep</h2>{}",
            "<div>".repeat(depth),
            "</div>".repeat(depth)
        );
        let page = html::extract(&doc);
        assert_bounded(&page);
        assert!(page.main_text.contains("deep"));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let doc = r#"<title>T</title><body><h1>Hi</h1><h2>A</h2><button>Go</button>
            <script>alert(1)</script><p>Body   copy</p></body>"#;
        let first = html::extract(doc);
        let second = html::extract(doc);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
