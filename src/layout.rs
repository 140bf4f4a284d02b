//! Page layouts and their rule tables.
//!
//! The upstream site has changed its title-page markup over the years. Each
//! generation is a [`Layout`] variant whose [`LayoutRules`] table holds every
//! query the engine runs; the engine itself is layout-agnostic.

use crate::dom::Document;
use crate::query::{BlockQuery, NodePath, Query};

/// A title-page markup generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Table-based page built around `td#overview-top` (2010-2012).
    Overview,
    /// Page built around `div.title_wrapper` and `div.plot_summary`.
    TitleWrapper,
}

/// Every query the engine needs for one layout.
#[derive(Debug, Clone)]
pub struct LayoutRules {
    /// Title text, first non-blank value.
    pub title: Query,
    /// Release year text.
    pub year: Query,
    /// Poster image `src`.
    pub poster: Query,

    /// Credited-person blocks (director, writers, stars).
    pub credits: BlockQuery,
    /// Path read under each credit block.
    pub credit_values: NodePath,
    /// Credit blocks dropped from the end of the list.
    pub skip_trailing_credit_blocks: usize,

    /// Region holding the synopsis, located by its heading.
    pub storyline_region: BlockQuery,
    /// Heading text of the storyline region.
    pub storyline_label: &'static str,
    /// Paragraphs inside the storyline region.
    pub storyline_paragraphs: NodePath,

    /// Cast member names, one per roster row.
    pub cast_names: Query,
    /// Lazy-load thumbnail attribute.
    pub cast_thumbnails: Query,
    /// Same anchor as `cast_thumbnails`, read from `src`.
    pub cast_thumbnails_fallback: Query,
    /// Character names, one per roster row.
    pub cast_roles: Query,

    /// User rating text.
    pub rating: Query,
    /// Vote count text.
    pub votes: Query,
    /// Genre links.
    pub genres: Query,

    /// Prefix for configured rules: detail blocks keyed by heading text.
    pub details: BlockQuery,
}

impl Layout {
    /// Pick the layout a parsed title page was rendered with.
    ///
    /// Pages that match no newer marker are treated as [`Layout::Overview`].
    #[must_use]
    pub fn detect(doc: &Document) -> Self {
        let layout = if Query::select("div.title_wrapper").exists(doc) {
            Self::TitleWrapper
        } else {
            Self::Overview
        };
        tracing::debug!(?layout, "detected page layout");
        layout
    }

    /// The rule table for this layout.
    #[must_use]
    pub fn rules(self) -> LayoutRules {
        match self {
            Self::Overview => overview_rules(),
            Self::TitleWrapper => title_wrapper_rules(),
        }
    }
}

fn overview_rules() -> LayoutRules {
    LayoutRules {
        title: Query::select("h1.header > span").text(),
        year: Query::select("h1.header > span > a").text(),
        poster: Query::select("td#img_primary > div > a > img").attr("src"),

        credits: BlockQuery {
            blocks: "td#overview-top > div.txt-block",
            heading: "h4",
        },
        credit_values: NodePath::child("a"),
        // the last overview block carries runtime/stars, read elsewhere
        skip_trailing_credit_blocks: 1,

        storyline_region: BlockQuery {
            blocks: "div.article",
            heading: "h2",
        },
        storyline_label: "Storyline",
        storyline_paragraphs: storyline_paragraphs(),

        cast_names: Query::select("td[itemprop='actor'] > a > span").text(),
        cast_thumbnails: Query::select("td.primary_photo > a > img").attr("loadlate"),
        cast_thumbnails_fallback: Query::select("td.primary_photo > a > img").attr("src"),
        cast_roles: Query::select("td.character > div > a").text(),

        rating: Query::select("span[itemprop='ratingValue']").text(),
        votes: Query::select("span[itemprop='ratingCount']").text(),
        genres: Query::select("div.infobar > a"),

        details: BlockQuery {
            blocks: "div.article > div.txt-block",
            heading: "h4",
        },
    }
}

fn title_wrapper_rules() -> LayoutRules {
    LayoutRules {
        title: Query::select("div.title_wrapper > h1").text(),
        year: Query::select("div.title_wrapper span#titleYear > a").text(),
        poster: Query::select("div.poster > a > img").attr("src"),

        credits: BlockQuery {
            blocks: "div.plot_summary div.credit_summary_item",
            heading: "h4",
        },
        credit_values: NodePath::child("a"),
        skip_trailing_credit_blocks: 0,

        storyline_region: BlockQuery {
            blocks: "div.article",
            heading: "h2",
        },
        storyline_label: "Storyline",
        storyline_paragraphs: storyline_paragraphs(),

        cast_names: Query::select("table.cast_list tr > td:nth-child(2) > a").text(),
        cast_thumbnails: Query::select("table.cast_list td.primary_photo > a > img").attr("loadlate"),
        cast_thumbnails_fallback: Query::select("table.cast_list td.primary_photo > a > img")
            .attr("src"),
        cast_roles: Query::select("table.cast_list td.character"),

        rating: Query::select("span[itemprop='ratingValue']").text(),
        votes: Query::select("span[itemprop='ratingCount']").text(),
        genres: Query::select("div.subtext > a[href*='genre']"),

        details: BlockQuery {
            blocks: "div#titleDetails > div.txt-block",
            heading: "h4",
        },
    }
}

fn storyline_paragraphs() -> NodePath {
    NodePath::child("div").then("p")
}
