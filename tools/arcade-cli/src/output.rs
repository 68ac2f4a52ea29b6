//! Output formatting for the CLI.

use arcade_storefront::StorefrontEvent;
use console::style;

/// Output handler for CLI messages.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a storefront notification, one line per event.
    pub fn event(&self, event: &StorefrontEvent) {
        if self.json {
            println!("{}", event.to_json());
        } else {
            println!("{} {}", style("→").cyan(), describe(event));
        }
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// One-line human description of a storefront notification.
pub fn describe(event: &StorefrontEvent) -> String {
    match event {
        StorefrontEvent::CartChanged(cart) => {
            format!("cart: {} item(s), total {}", cart.count, cart.total.display())
        }
        StorefrontEvent::SlideChanged { index } => format!("slide {}", index + 1),
        StorefrontEvent::SelectionOpened(detail) => {
            format!("showing {} ({})", detail.title, detail.price_display)
        }
        StorefrontEvent::SelectionClosed => "detail closed".to_string(),
        StorefrontEvent::CartPanelOpened => "cart opened".to_string(),
        StorefrontEvent::CartPanelClosed => "cart closed".to_string(),
        StorefrontEvent::SearchResultsReady { query, results } => {
            let titles: Vec<&str> = results.iter().map(|g| g.title.as_str()).collect();
            format!("{} result(s) for {:?}: {}", results.len(), query, titles.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_commerce::cart::CartSnapshot;
    use arcade_commerce::Money;

    #[test]
    fn test_describe_events() {
        let cart = StorefrontEvent::CartChanged(CartSnapshot {
            count: 2,
            total: Money::new(4498),
            items: Vec::new(),
        });
        assert_eq!(describe(&cart), "cart: 2 item(s), total $44.98");
        assert_eq!(describe(&StorefrontEvent::SlideChanged { index: 0 }), "slide 1");

        let empty = StorefrontEvent::SearchResultsReady {
            query: "zelda".to_string(),
            results: Vec::new(),
        };
        assert_eq!(describe(&empty), "0 result(s) for \"zelda\": ");
    }
}
