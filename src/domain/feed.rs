//! Queries over the JetBrains updates document.
//!
//! The document lists products, each with channels, each with builds in
//! reverse-chronological order. A channel query is the tree-walk form of
//! `/products/product[@name=P]/channel[@id=C]/build[1]/@A`.

use roxmltree::{Document, Node};

use crate::domain::AppError;

/// One channel selection within the updates document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelQuery {
    /// `product/@name` to select.
    pub product: &'static str,
    /// `channel/@id` to select within the product.
    pub channel_id: &'static str,
    /// Attribute read from the first `build` element of the channel.
    pub attribute: &'static str,
}

/// Latest stable IntelliJ IDEA release; the feed reports it as `version`.
pub const STABLE_QUERY: ChannelQuery = ChannelQuery {
    product: "IntelliJ IDEA",
    channel_id: "IC-IU-RELEASE-licensing-RELEASE",
    attribute: "version",
};

/// Latest IntelliJ IDEA EAP build; the feed reports it as `fullNumber`.
pub const EAP_QUERY: ChannelQuery = ChannelQuery {
    product: "IntelliJ IDEA",
    channel_id: "IC-IU-EAP-licensing-EAP",
    attribute: "fullNumber",
};

/// Evaluate a channel query against the raw updates XML, returning the
/// build string.
pub fn select_build(xml: &str, query: &ChannelQuery) -> Result<String, AppError> {
    let document = Document::parse(xml).map_err(|e| AppError::ParseError {
        what: "updates feed XML".to_string(),
        details: e.to_string(),
    })?;

    let products = document.root_element();
    let product = child_elements(&products, "product")
        .find(|node| node.attribute("name") == Some(query.product))
        .ok_or_else(|| parse_error(format!("product '{}' not found", query.product)))?;

    let channel = child_elements(&product, "channel")
        .find(|node| node.attribute("id") == Some(query.channel_id))
        .ok_or_else(|| parse_error(format!("channel '{}' not found", query.channel_id)))?;

    let build = child_elements(&channel, "build")
        .next()
        .ok_or_else(|| parse_error(format!("channel '{}' has no builds", query.channel_id)))?;

    let value = build
        .attribute(query.attribute)
        .ok_or_else(|| parse_error(format!("build is missing attribute '{}'", query.attribute)))?
        .trim();

    if value.is_empty() {
        return Err(parse_error(format!("build attribute '{}' is empty", query.attribute)));
    }

    Ok(value.to_string())
}

fn child_elements<'a, 'input>(
    node: &Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

fn parse_error(details: String) -> AppError {
    AppError::ParseError { what: "updates feed XML".to_string(), details }
}
