use crate::shared::notify::ToastHost;
use leptos::prelude::*;

/// Application shell: header with navigation, content area, toast stack.
///
/// ```text
/// +------------------------------------------+
/// |  Title            |  nav tabs            |
/// +------------------------------------------+
/// |                 content                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<N>(
    /// Portal title shown in the header
    title: &'static str,
    /// Navigation tabs rendered on the right side of the header
    nav: N,
    /// Page content
    children: Children,
) -> impl IntoView
where
    N: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="portal-shell">
            <header class="portal-header">
                <div class="portal-header__title">{title}</div>
                <nav class="portal-header__nav">{nav()}</nav>
            </header>
            <main class="portal-content">
                {children()}
            </main>
            <ToastHost />
        </div>
    }
}
