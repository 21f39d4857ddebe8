//! Checker Page

use std::rc::Rc;

use checker_client::HttpCheckerApi;
use checker_core::{ViewState, Workflow};
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ResultPanel, StatsPanel};
use crate::host::{FormSubmit, SignalStore, WebBrowser};
use crate::settings;

type PageWorkflow = Workflow<HttpCheckerApi, SignalStore, WebBrowser>;

#[component]
pub fn CheckerPage() -> impl IntoView {
    let config = settings::load();
    let api = match HttpCheckerApi::new(config.clone()) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Cannot start checker client: {}", e);
            return view! { <p class="error">"The checker is misconfigured."</p> }.into_any();
        }
    };

    let state = RwSignal::new(ViewState::new());
    let allow_reset = config.allow_reset;
    let amount = config.payment.amount_param();
    let workflow: PageWorkflow = Workflow::new(api, SignalStore(state), WebBrowser, config);
    let workflow = StoredValue::new_local(Rc::new(workflow));
    let (code, set_code) = signal(String::new());

    // Quota summary on load
    let wf = workflow.get_value();
    spawn_local(async move { wf.refresh_quota().await });

    let on_submit = move |ev: SubmitEvent| {
        let wf = workflow.get_value();
        let submission = wf.accept(&FormSubmit(&ev), &code.get_untracked());
        spawn_local(async move { wf.submit(submission).await });
    };

    let buy = move |_: MouseEvent| {
        let wf = workflow.get_value();
        spawn_local(async move {
            wf.buy_calls().await;
        });
    };

    let reset = move |_: MouseEvent| {
        let wf = workflow.get_value();
        spawn_local(async move { wf.reset_quota().await });
    };

    view! {
        <div class="checker">
            <h1>"Syntax Checker"</h1>
            <p class="subtitle">"Validate an assignment statement such as " <code>"int a = 5;"</code></p>

            <form id="syntaxForm" on:submit=on_submit>
                <textarea
                    id="codeInput"
                    placeholder="Enter your code here..."
                    prop:value=move || code.get()
                    on:input=move |ev| set_code.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Check Syntax"</button>
            </form>

            <ResultPanel state=state />
            <StatsPanel state=state />

            <Show when=move || state.with(|s| s.pay_visible)>
                <div class="pay">
                    <p>"You have used up all your API calls."</p>
                    <button id="payButton" class="btn btn-primary" on:click=buy>
                        {format!("Get 100 API calls for ${amount}!")}
                    </button>
                </div>
            </Show>

            <Show when=move || allow_reset>
                <button class="btn" on:click=reset>"Reset calls"</button>
            </Show>
        </div>
    }
    .into_any()
}
