use leptos::prelude::*;

use crate::components::{category_grid::CategoryGrid, trust_bar::TrustBar};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! {
        <CategoryGrid/>
        <TrustBar/>
    }
}
