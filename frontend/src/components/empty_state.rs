use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-8 px-4">
            <p class="text-sm text-muted">{title}</p>
            {move || description.clone().map(|desc| view! {
                <p class="mt-1 text-xs text-muted">{desc}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_renders_title_and_description() {
        let html = render_to_string(move || {
            view! { <EmptyState title="No attendance records yet" description="Mark attendance above." /> }
        });
        assert!(html.contains("No attendance records yet"));
        assert!(html.contains("Mark attendance above."));
    }
}
