//! Per-category Astro component templates.
//!
//! Every template is total: missing texts fall back to literal copy, and every
//! component declares default values for its parameters so it renders with no
//! props at all.

use super::escape::{attribute, js_string, markup_text};
use sprig_core::{ComponentCategory, StyleTokens};

const HERO_SUBTITLE: &str = "Welcome to our amazing website";
const HERO_CTA: &str = "Get Started";
const TESTIMONIAL_QUOTE: &str = "This is an amazing service!";
const TESTIMONIAL_AUTHOR: &str = "Happy Customer";
const TESTIMONIAL_ROLE: &str = "Customer";
const NEWSLETTER_TITLE: &str = "Subscribe to our newsletter";
const NEWSLETTER_DESCRIPTION: &str = "Get the latest updates and news.";
const CTA_TITLE: &str = "Ready to get started?";
const CTA_DESCRIPTION: &str = "Join thousands of satisfied customers.";
const CTA_BUTTON: &str = "Get Started Now";
const CARD_DESCRIPTION: &str = "This is a card component with some description text.";

const FOOTER_LINKS: usize = 6;
const GALLERY_IMAGES: usize = 8;
const BODY_PARAGRAPHS: usize = 3;

/// What a template renders from.
struct Slots<'a> {
    category: ComponentCategory,
    name: &'a str,
    texts: &'a [String],
    /// Root element class list, style classes included.
    class: String,
}

impl<'a> Slots<'a> {
    fn text(&self, index: usize) -> Option<&'a str> {
        self.texts.get(index).map(String::as_str)
    }

    /// Texts `start..start + len`, clamped to what exists.
    fn range(&self, start: usize, len: usize) -> &'a [String] {
        let start = start.min(self.texts.len());
        let end = start.saturating_add(len).min(self.texts.len());
        &self.texts[start..end]
    }

    /// Opening tag of the root element.
    fn open(&self, tag: &str) -> String {
        format!("<{} id=\"{}\" class=\"{}\">", tag, attribute(self.name), self.class)
    }
}

type Template = fn(&Slots<'_>) -> String;

/// The single category-to-template table.
fn template_for(category: ComponentCategory) -> Template {
    match category {
        ComponentCategory::Navbar => navbar,
        ComponentCategory::Hero => hero,
        ComponentCategory::Footer => footer,
        ComponentCategory::Gallery => gallery,
        ComponentCategory::Testimonial => testimonial,
        ComponentCategory::Newsletter => newsletter,
        ComponentCategory::Cta => cta,
        ComponentCategory::Card => card,
        ComponentCategory::AboutUs | ComponentCategory::Blog | ComponentCategory::Section => section,
    }
}

/// Base root classes per category.
fn base_class(category: ComponentCategory) -> &'static str {
    match category {
        ComponentCategory::Navbar => "p-4 mb-4 bg-white shadow rounded flex justify-center space-x-2",
        ComponentCategory::Hero => {
            "p-8 mb-4 bg-gradient-to-r from-blue-500 to-purple-600 text-white rounded shadow-lg text-center"
        }
        ComponentCategory::Footer => "p-6 mb-4 bg-gray-800 text-white rounded",
        ComponentCategory::Testimonial => "p-6 mb-4 bg-gray-50 border-l-4 border-blue-500 rounded shadow",
        ComponentCategory::Newsletter => "p-6 mb-4 bg-blue-50 border rounded shadow",
        ComponentCategory::Cta => "p-8 mb-4 bg-orange-500 text-white rounded shadow-lg text-center",
        ComponentCategory::Card => {
            "p-4 mb-4 border rounded bg-white shadow hover:shadow-lg transition-shadow duration-200"
        }
        ComponentCategory::Gallery
        | ComponentCategory::AboutUs
        | ComponentCategory::Blog
        | ComponentCategory::Section => "p-4 mb-4 border rounded bg-white shadow",
    }
}

/// Render the component source for one admitted frame.
///
/// Never fails and never returns an empty string.
pub fn render(
    category: ComponentCategory,
    name: &str,
    texts: &[String],
    style: &StyleTokens,
) -> String {
    let mut classes = vec![base_class(category).to_string()];
    classes.extend(style.classes());
    let slots = Slots {
        category,
        name,
        texts,
        class: attribute(&classes.join(" ")),
    };
    template_for(category)(&slots)
}

/// Frontmatter declaring each prop with its default.
fn frontmatter(props: &[(&str, &str)]) -> String {
    let props = props
        .iter()
        .map(|(prop, default)| format!("{} = {}", prop, js_string(default)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("---\nconst {{ {} }} = Astro.props;\n---", props)
}

fn paragraphs(texts: &[String], class: &str, indent: usize) -> Vec<String> {
    let spaces = " ".repeat(indent);
    texts
        .iter()
        .map(|t| format!("{}<p class=\"{}\">{}</p>", spaces, class, markup_text(t)))
        .collect()
}

fn navbar(s: &Slots<'_>) -> String {
    let labels: Vec<&str> = if s.texts.is_empty() {
        vec![s.name]
    } else {
        s.texts.iter().map(String::as_str).collect()
    };

    let mut lines = vec![frontmatter(&[("title", s.name)])];
    lines.push(format!(
        "<nav id=\"{}\" class=\"{}\" aria-label={{title}}>",
        attribute(s.name),
        s.class
    ));
    for label in labels {
        lines.push(format!(
            "  <a href=\"#\" class=\"text-gray-700 hover:text-orange-500 px-4 py-2\">{}</a>",
            markup_text(label)
        ));
    }
    lines.push("</nav>".to_string());
    lines.join("\n")
}

/// First text is the title; with three or more texts the last is the call to
/// action and the ones between form the subtitle.
fn hero(s: &Slots<'_>) -> String {
    let title = s.text(0).unwrap_or(s.name);
    let (subtitle, cta) = match s.texts.len() {
        0 | 1 => (HERO_SUBTITLE.to_string(), HERO_CTA),
        2 => (s.texts[1].clone(), HERO_CTA),
        n => (s.texts[1..n - 1].join(" "), s.texts[n - 1].as_str()),
    };

    let mut lines = vec![frontmatter(&[
        ("title", title),
        ("subtitle", subtitle.as_str()),
        ("cta", cta),
    ])];
    lines.push(s.open("section"));
    lines.push("  <h1 class=\"font-bold text-4xl mb-4\">{title}</h1>".to_string());
    lines.push("  <p class=\"text-xl mb-6\">{subtitle}</p>".to_string());
    lines.push(
        "  <button class=\"bg-white text-blue-600 px-6 py-3 rounded-lg font-semibold hover:bg-gray-100 transition-colors\">"
            .to_string(),
    );
    lines.push("    {cta}".to_string());
    lines.push("  </button>".to_string());
    lines.push("</section>".to_string());
    lines.join("\n")
}

/// The first texts are links; whatever follows is the copyright line.
fn footer(s: &Slots<'_>) -> String {
    let links = s.range(0, FOOTER_LINKS);
    let rest = s.range(FOOTER_LINKS, usize::MAX);
    let copyright = if rest.is_empty() {
        s.name.to_string()
    } else {
        rest.join(" ")
    };

    let mut lines = vec![frontmatter(&[("copyright", copyright.as_str())])];
    lines.push(s.open("footer"));
    if !links.is_empty() {
        lines.push("  <div class=\"flex justify-center space-x-4 mb-4\">".to_string());
        for link in links {
            lines.push(format!(
                "    <a href=\"#\" class=\"text-gray-400 hover:text-white\">{}</a>",
                markup_text(link)
            ));
        }
        lines.push("  </div>".to_string());
    }
    lines.push("  <div class=\"text-center text-gray-400\">".to_string());
    lines.push(
        "    <p>&copy; {new Date().getFullYear()} {copyright}. All rights reserved.</p>".to_string(),
    );
    lines.push("  </div>".to_string());
    lines.push("</footer>".to_string());
    lines.join("\n")
}

fn gallery(s: &Slots<'_>) -> String {
    let fallback = [s.name.to_string()];
    let captions = if s.texts.is_empty() {
        &fallback[..]
    } else {
        s.range(0, GALLERY_IMAGES)
    };

    let mut lines = vec![frontmatter(&[("title", s.name)])];
    lines.push(s.open("section"));
    lines.push("  <h2 class=\"font-bold text-xl mb-4\">{title}</h2>".to_string());
    lines.push("  <div class=\"grid grid-cols-2 md:grid-cols-4 gap-4\">".to_string());
    for (i, caption) in captions.iter().enumerate() {
        lines.push("    <figure class=\"flex flex-col items-center\">".to_string());
        lines.push(format!(
            "      <img src=\"https://via.placeholder.com/150?text=Image+{}\" alt=\"{}\" class=\"rounded shadow mb-2\" />",
            i + 1,
            attribute(caption)
        ));
        lines.push(format!(
            "      <figcaption class=\"text-sm text-gray-600 text-center\">{}</figcaption>",
            markup_text(caption)
        ));
        lines.push("    </figure>".to_string());
    }
    lines.push("  </div>".to_string());
    lines.push("</section>".to_string());
    lines.join("\n")
}

fn testimonial(s: &Slots<'_>) -> String {
    let mut lines = vec![frontmatter(&[
        ("quote", s.text(0).unwrap_or(TESTIMONIAL_QUOTE)),
        ("author", s.text(1).unwrap_or(TESTIMONIAL_AUTHOR)),
        ("role", s.text(2).unwrap_or(TESTIMONIAL_ROLE)),
    ])];
    lines.push(s.open("section"));
    lines.push("  <blockquote class=\"text-lg italic text-gray-700 mb-4\">\"{quote}\"</blockquote>".to_string());
    lines.push("  <div class=\"flex items-center\">".to_string());
    lines.push(
        "    <div class=\"w-12 h-12 bg-blue-500 rounded-full flex items-center justify-center text-white font-bold mr-4\">"
            .to_string(),
    );
    lines.push("      {author.charAt(0)}".to_string());
    lines.push("    </div>".to_string());
    lines.push("    <div>".to_string());
    lines.push("      <p class=\"font-semibold\">{author}</p>".to_string());
    lines.push("      <p class=\"text-gray-600 text-sm\">{role}</p>".to_string());
    lines.push("    </div>".to_string());
    lines.push("  </div>".to_string());
    lines.push("</section>".to_string());
    lines.join("\n")
}

fn newsletter(s: &Slots<'_>) -> String {
    let mut lines = vec![frontmatter(&[
        ("title", s.text(0).unwrap_or(NEWSLETTER_TITLE)),
        ("description", s.text(1).unwrap_or(NEWSLETTER_DESCRIPTION)),
    ])];
    lines.push(s.open("section"));
    lines.push("  <h3 class=\"font-bold text-xl mb-2\">{title}</h3>".to_string());
    lines.push("  <p class=\"text-gray-700 mb-4\">{description}</p>".to_string());
    lines.push("  <form class=\"flex gap-2\">".to_string());
    lines.push(
        "    <input type=\"email\" placeholder=\"Enter your email\" class=\"flex-1 px-3 py-2 border rounded focus:outline-none focus:ring-2 focus:ring-blue-500\" />"
            .to_string(),
    );
    lines.push(
        "    <button type=\"submit\" class=\"bg-blue-500 text-white px-4 py-2 rounded hover:bg-blue-600 transition-colors\">"
            .to_string(),
    );
    lines.push("      Subscribe".to_string());
    lines.push("    </button>".to_string());
    lines.push("  </form>".to_string());
    lines.push("</section>".to_string());
    lines.join("\n")
}

fn cta(s: &Slots<'_>) -> String {
    let mut lines = vec![frontmatter(&[
        ("title", s.text(0).unwrap_or(CTA_TITLE)),
        ("description", s.text(1).unwrap_or(CTA_DESCRIPTION)),
        ("buttonText", s.text(2).unwrap_or(CTA_BUTTON)),
    ])];
    lines.push(s.open("section"));
    lines.push("  <h2 class=\"font-bold text-2xl mb-2\">{title}</h2>".to_string());
    lines.push("  <p class=\"text-lg mb-6\">{description}</p>".to_string());
    lines.push(
        "  <button class=\"bg-white text-orange-500 px-8 py-3 rounded-lg font-semibold hover:bg-gray-100 transition-colors text-lg\">"
            .to_string(),
    );
    lines.push("    {buttonText}".to_string());
    lines.push("  </button>".to_string());
    lines.push("</section>".to_string());
    lines.join("\n")
}

fn card(s: &Slots<'_>) -> String {
    let title = s.text(0).unwrap_or(s.name);
    let description = s.range(1, BODY_PARAGRAPHS);
    let placeholder: String = url::form_urlencoded::byte_serialize(title.as_bytes()).collect();

    let mut lines = vec![frontmatter(&[("title", title)])];
    lines.push(s.open("div"));
    lines.push("  <h3 class=\"font-bold text-lg mb-2\">{title}</h3>".to_string());
    if description.is_empty() {
        lines.push(format!("  <p class=\"text-gray-700 mb-2\">{}</p>", CARD_DESCRIPTION));
    } else {
        lines.extend(paragraphs(description, "text-gray-700 mb-2", 2));
    }
    lines.push(format!(
        "  <img src=\"https://via.placeholder.com/300x150?text={}\" alt={{title}} class=\"rounded mt-2 w-full\" />",
        attribute(&placeholder)
    ));
    lines.push("</div>".to_string());
    lines.join("\n")
}

/// Shared layout for AboutUs, Blog, and Section.
fn section(s: &Slots<'_>) -> String {
    let title = s.text(0).unwrap_or(s.name);
    let body = s.range(1, BODY_PARAGRAPHS);

    let mut lines = vec![frontmatter(&[("title", title)])];
    lines.push(s.open("section"));
    lines.push("  <h2 class=\"font-bold text-xl mb-4\">{title}</h2>".to_string());
    if body.is_empty() {
        lines.push(format!(
            "  <p class=\"mb-2\">This is a {} section with some content.</p>",
            s.category.as_str().to_lowercase()
        ));
    } else {
        lines.extend(paragraphs(body, "mb-2", 2));
    }
    lines.push("</section>".to_string());
    lines.join("\n")
}
