//! Page assembly: orders components and renders the composing page.

use super::escape::{attribute, js_string, markup_text};
use crate::model::{GeneratedComponent, PageDocument};
use crate::options::PageOptions;
use crate::Result;
use sprig_core::{CompileError, ComponentCategory};
use std::collections::HashSet;

/// Order `components` into a page and render its scaffold.
///
/// The first Navbar leads the page and the first Footer closes it; every
/// other component keeps its discovery order in between. Fails if two
/// components share a symbolic name, since their imports would collide.
pub fn assemble(components: Vec<GeneratedComponent>, options: &PageOptions) -> Result<PageDocument> {
    check_unique_names(&components)?;

    let mut navbar = None;
    let mut footer = None;
    let mut others = Vec::with_capacity(components.len());
    for component in components {
        let category = component.category;
        match category {
            ComponentCategory::Navbar if navbar.is_none() => navbar = Some(component),
            ComponentCategory::Footer if footer.is_none() => footer = Some(component),
            _ => others.push(component),
        }
    }

    let ordered: Vec<GeneratedComponent> = navbar
        .into_iter()
        .chain(others)
        .chain(footer)
        .collect();
    let source = render_page(&ordered, options);

    Ok(PageDocument {
        components: ordered,
        source,
    })
}

fn check_unique_names(components: &[GeneratedComponent]) -> Result<()> {
    let mut seen = HashSet::with_capacity(components.len());
    for component in components {
        if !seen.insert(component.symbolic_name.as_str()) {
            tracing::error!(
                name = %component.symbolic_name,
                id = %component.id,
                category = %component.category,
                "duplicate component name"
            );
            return Err(CompileError::NamingCollision {
                name: component.symbolic_name.clone(),
                id: component.id.clone(),
                category: component.category.to_string(),
            });
        }
    }
    Ok(())
}

fn render_page(components: &[GeneratedComponent], options: &PageOptions) -> String {
    let dir = options.components_dir.trim_end_matches('/');
    let mut lines = vec!["---".to_string()];
    for component in components {
        let path = format!("{}/{}", dir, component.file_name());
        lines.push(format!(
            "import {} from {};",
            component.symbolic_name,
            js_string(&path)
        ));
    }
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(format!("<html lang=\"{}\">", attribute(&options.lang)));
    lines.push("  <head>".to_string());
    lines.push("    <meta charset=\"utf-8\" />".to_string());
    lines.push("    <link rel=\"icon\" type=\"image/svg+xml\" href=\"/favicon.svg\" />".to_string());
    lines.push(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />".to_string(),
    );
    lines.push("    <meta name=\"generator\" content={Astro.generator} />".to_string());
    lines.push(format!("    <title>{}</title>", markup_text(&options.title)));
    if let Some(ref cdn) = options.tailwind_cdn {
        lines.push(format!("    <script src=\"{}\"></script>", attribute(cdn)));
    }
    lines.push("  </head>".to_string());
    lines.push("  <body class=\"bg-gray-100 min-h-screen\">".to_string());
    lines.push("    <div class=\"container mx-auto px-4 py-8\">".to_string());
    for component in components {
        lines.push(format!("      <{} />", component.symbolic_name));
    }
    lines.push("    </div>".to_string());
    lines.push("  </body>".to_string());
    lines.push("</html>".to_string());
    lines.join("\n")
}
