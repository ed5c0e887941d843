use client::ApiClient;
use dioxus::prelude::*;

/// Makes `client` available to everything below it.
///
/// The session itself lives in the cookie jar behind the client, so the
/// client is the only value routes share.
#[component]
pub fn ApiProvider(client: ApiClient, children: Element) -> Element {
    use_context_provider(|| client);
    rsx! { {children} }
}

/// Hook to access the API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
