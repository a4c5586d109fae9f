//! Ordered route table and the pure dispatcher over it.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

/// Prefix of the per-category product pages.
pub const PRODUCT_PREFIX: &str = "/product/";

/// How a route table entry matches a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Exact(&'static str),
    Prefix(&'static str),
}

/// Renderer identity selected by a route table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Categories,
    Help,
    About,
    Faq,
    Privacy,
    Shipping,
    Terms,
    Legal,
    Contact,
    Quote,
    Product,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRoute {
    pub pattern: Pattern,
    pub page: Page,
}

const fn exact(path: &'static str, page: Page) -> PageRoute {
    PageRoute { pattern: Pattern::Exact(path), page }
}

const fn prefix(path: &'static str, page: Page) -> PageRoute {
    PageRoute { pattern: Pattern::Prefix(path), page }
}

/// Every recognized route. Exact entries are tried first, in table order,
/// then prefix entries, in table order.
pub const ROUTES: &[PageRoute] = &[
    exact("/", Page::Home),
    exact("/categories", Page::Categories),
    exact("/help", Page::Help),
    exact("/about", Page::About),
    exact("/faq", Page::Faq),
    exact("/privacy", Page::Privacy),
    exact("/shipping", Page::Shipping),
    exact("/terms", Page::Terms),
    exact("/legal", Page::Legal),
    exact("/contact", Page::Contact),
    exact("/quote", Page::Quote),
    prefix(PRODUCT_PREFIX, Page::Product),
];

/// Result of dispatching a fragment path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Categories,
    Help,
    About,
    Faq,
    Privacy,
    Shipping,
    Terms,
    Legal,
    Contact,
    Quote,
    /// Product page for the id segment after [`PRODUCT_PREFIX`]. The id may be
    /// unknown to the catalog; the product renderer handles that.
    Product(String),
    NotFound,
}

/// Select the route for a normalized fragment path (no `#`, no query).
///
/// Matching is case-sensitive and exact; trailing slashes are significant.
pub fn dispatch(path: &str) -> Route {
    let exact_hit = ROUTES.iter().find(|r| matches!(r.pattern, Pattern::Exact(p) if p == path));
    if let Some(entry) = exact_hit {
        return route_for(entry.page, "");
    }

    for entry in ROUTES {
        if let Pattern::Prefix(p) = entry.pattern {
            if let Some(rest) = path.strip_prefix(p) {
                return route_for(entry.page, rest);
            }
        }
    }

    Route::NotFound
}

fn route_for(page: Page, rest: &str) -> Route {
    match page {
        Page::Home => Route::Home,
        Page::Categories => Route::Categories,
        Page::Help => Route::Help,
        Page::About => Route::About,
        Page::Faq => Route::Faq,
        Page::Privacy => Route::Privacy,
        Page::Shipping => Route::Shipping,
        Page::Terms => Route::Terms,
        Page::Legal => Route::Legal,
        Page::Contact => Route::Contact,
        Page::Quote => Route::Quote,
        Page::Product => Route::Product(first_segment(rest).to_owned()),
    }
}

fn first_segment(rest: &str) -> &str {
    rest.split('/').next().unwrap_or_default()
}

/// Table consistency problems reported by [`validate_table`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    DuplicateExact(&'static str),
    ShadowedExact { exact: &'static str, prefix: &'static str },
}

/// Check that no two exact patterns collide and that no prefix pattern would
/// also match one of the exact paths.
pub fn validate_table(routes: &[PageRoute]) -> Result<(), TableError> {
    let exacts: Vec<&'static str> = routes
        .iter()
        .filter_map(|r| match r.pattern {
            Pattern::Exact(p) => Some(p),
            Pattern::Prefix(_) => None,
        })
        .collect();

    for (i, a) in exacts.iter().enumerate() {
        if exacts[i + 1..].contains(a) {
            return Err(TableError::DuplicateExact(*a));
        }
    }

    for route in routes {
        if let Pattern::Prefix(prefix) = route.pattern {
            if let Some(&exact) = exacts.iter().find(|e| e.starts_with(prefix)) {
                return Err(TableError::ShadowedExact { exact, prefix });
            }
        }
    }

    Ok(())
}
