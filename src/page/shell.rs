use super::container::Container;

/// Assembles the final HTML document
///
/// Fixed skeleton with the two containers' rendered contents inlined. The
/// shell never inspects what the loaders appended.
pub struct PageShell {
    title: String,
}

impl PageShell {
    /// Create a shell with the default page title
    pub fn new() -> Self {
        Self {
            title: "Homepage".to_string(),
        }
    }

    /// Set the page title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Build the full document around the two containers
    pub fn assemble(&self, greeting: &Container, blog: &Container) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
</head>
<body>
    <div id="{}">{}</div>
    <div id="{}">{}</div>
</body>
</html>"#,
            self.title,
            greeting.id(),
            greeting.render(),
            blog.id(),
            blog.render()
        )
    }
}

impl Default for PageShell {
    fn default() -> Self {
        Self::new()
    }
}
