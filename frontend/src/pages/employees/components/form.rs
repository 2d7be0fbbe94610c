use crate::{pages::employees::utils::EmployeeFormState, state::employees::EmployeesState};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EmployeeForm(
    form: RwSignal<EmployeeFormState>,
    state: RwSignal<EmployeesState>,
    on_submit: Callback<SubmitEvent>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = Signal::derive(move || state.with(|s| s.is_editing()));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let submit_label = move || match (editing.get(), loading.get()) {
        (true, true) => "Saving...",
        (true, false) => "Save Changes",
        (false, true) => "Adding...",
        (false, false) => "Add Employee",
    };

    view! {
        <section class="card">
            <h2 class="card-title">
                {move || if editing.get() { "Edit Employee" } else { "Register Employee" }}
            </h2>
            <form class="form-grid" on:submit=move |ev| on_submit.call(ev)>
                <label class="field">
                    <span>"Employee ID"</span>
                    <input
                        type="number"
                        min="1"
                        placeholder="e.g. 1001"
                        disabled=move || editing.get()
                        prop:value=move || form.with(|f| f.emp_id.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.emp_id = value);
                        }
                    />
                </label>
                <label class="field">
                    <span>"Full Name"</span>
                    <input
                        type="text"
                        placeholder="Jane Doe"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.full_name = value);
                        }
                    />
                </label>
                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        placeholder="jane@company.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />
                </label>
                <label class="field">
                    <span>"Department"</span>
                    <input
                        type="text"
                        placeholder="Engineering"
                        prop:value=move || form.with(|f| f.department.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.department = value);
                        }
                    />
                </label>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {submit_label}
                    </button>
                    <Show when=move || editing.get()>
                        <button
                            type="button"
                            class="btn"
                            disabled=move || loading.get()
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
        </section>
    }
}
