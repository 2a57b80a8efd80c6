use std::str::FromStr;

use dioxus::prelude::*;
use prep_core::dashboard::{PageSize, PremiumFilter};
use prep_core::model::{Difficulty, QuestionId, SolvedMap};

use crate::context::AppContext;
use crate::vm::{QuestionRowVm, map_dashboard};

#[component]
pub fn QuestionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut dashboard = use_signal(|| ctx.dashboard());
    let mut solved = use_signal(SolvedMap::new);
    let companies = use_hook(|| dashboard.peek().companies());
    let topics = use_hook(|| dashboard.peek().topics());

    let store = ctx.solved();
    use_future(move || {
        let store = store.clone();
        async move {
            store.load().await;
            solved.set(store.snapshot());
        }
    });

    // The store serializes updates, so its snapshot is always the newest map.
    let toggle_store = ctx.solved();
    let on_toggle = use_callback(move |id: QuestionId| {
        let store = toggle_store.clone();
        spawn(async move {
            store.toggle(&id).await;
            solved.set(store.snapshot());
        });
    });

    let on_topic = use_callback(move |topic: String| {
        dashboard.write().toggle_topic(&topic);
    });

    let vm = use_memo(move || map_dashboard(&dashboard.read().view(&solved.read())))();
    let criteria = dashboard.read().criteria().clone();
    let page_size = dashboard.read().pagination().page_size();
    let jump_input = dashboard.read().pagination().jump_input().to_string();
    let pager = vm.pager.clone();

    rsx! {
        div { class: "page questions",
            h2 { "Company-wise questions" }

            section { class: "progress",
                for bar in vm.bars.iter() {
                    div { class: "progress-item {bar.class}",
                        span { class: "progress-label", "{bar.label}" }
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "{bar.width_style}" }
                        }
                        span { class: "progress-count", "{bar.count_label} ({bar.percent_label})" }
                    }
                }
            }

            section { class: "filters",
                input {
                    r#type: "search",
                    placeholder: "Search title, company or topic",
                    value: "{criteria.query}",
                    oninput: move |evt| dashboard.write().set_query(evt.value()),
                }
                select {
                    onchange: move |evt| {
                        let difficulty = Difficulty::from_str(&evt.value()).ok();
                        dashboard.write().set_difficulty(difficulty);
                    },
                    option { value: "", selected: criteria.difficulty.is_none(), "All difficulties" }
                    for difficulty in Difficulty::ALL {
                        option {
                            value: difficulty.as_str(),
                            selected: criteria.difficulty == Some(difficulty),
                            "{difficulty}"
                        }
                    }
                }
                select {
                    onchange: move |evt| {
                        dashboard.write().set_premium(PremiumFilter::from_value(&evt.value()));
                    },
                    option { value: "all", selected: criteria.premium == PremiumFilter::All, "Free and premium" }
                    option { value: "free", selected: criteria.premium == PremiumFilter::Free, "Free only" }
                    option { value: "premium", selected: criteria.premium == PremiumFilter::Premium, "Premium only" }
                }
                select {
                    onchange: move |evt| {
                        let value = evt.value();
                        dashboard.write().set_company((!value.is_empty()).then_some(value));
                    },
                    option { value: "", selected: criteria.company.is_none(), "All companies" }
                    for company in companies.iter() {
                        option {
                            value: "{company.name}",
                            selected: criteria.company.as_deref() == Some(company.name.as_str()),
                            "{company.name} ({company.count})"
                        }
                    }
                }
            }

            section { class: "topics",
                for topic in topics.iter() {
                    TopicChip {
                        key: "{topic}",
                        topic: topic.clone(),
                        active: criteria.topics.contains(topic),
                        on_toggle: on_topic,
                    }
                }
                if !criteria.topics.is_empty() {
                    button {
                        class: "chip clear",
                        onclick: move |_| dashboard.write().clear_topics(),
                        "Clear topics"
                    }
                }
            }

            if vm.is_empty {
                p { class: "empty", "No questions match these filters." }
            } else {
                table { class: "question-table",
                    thead {
                        tr {
                            th { "Solved" }
                            th { "Title" }
                            th { "Company" }
                            th { "Difficulty" }
                            th { "Acceptance" }
                            th { "Frequency" }
                            th { "Topics" }
                        }
                    }
                    tbody {
                        for row in vm.rows.iter() {
                            QuestionRow {
                                key: "{row.id}-{row.company}",
                                row: row.clone(),
                                on_toggle,
                            }
                        }
                    }
                }
            }

            footer { class: "pager",
                span { class: "pager-range", "{pager.range_label}" }
                button {
                    disabled: !pager.has_previous,
                    onclick: move |_| dashboard.write().first_page(),
                    "First"
                }
                button {
                    disabled: !pager.has_previous,
                    onclick: move |_| dashboard.write().previous_page(),
                    "Previous"
                }
                span { class: "pager-page", "{pager.page_label}" }
                button {
                    disabled: !pager.has_next,
                    onclick: move |_| dashboard.write().next_page(),
                    "Next"
                }
                button {
                    disabled: !pager.has_next,
                    onclick: move |_| dashboard.write().last_page(),
                    "Last"
                }
                select {
                    onchange: move |evt| {
                        if let Some(size) = evt.value().parse().ok().and_then(PageSize::from_value) {
                            dashboard.write().set_page_size(size);
                        }
                    },
                    for size in PageSize::ALL {
                        option {
                            value: "{size.value()}",
                            selected: size == page_size,
                            "{size.value()} per page"
                        }
                    }
                }
                input {
                    class: "pager-jump",
                    r#type: "number",
                    min: "1",
                    placeholder: "Page",
                    value: "{jump_input}",
                    oninput: move |evt| dashboard.write().set_jump_input(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            // Out-of-range input stays in the box and the page does not move.
                            dashboard.write().confirm_jump();
                        }
                    },
                }
                button {
                    onclick: move |_| {
                        dashboard.write().confirm_jump();
                    },
                    "Go"
                }
            }
        }
    }
}

#[component]
fn TopicChip(topic: String, active: bool, on_toggle: EventHandler<String>) -> Element {
    let class = if active { "chip active" } else { "chip" };
    let value = topic.clone();
    rsx! {
        button { class, onclick: move |_| on_toggle.call(value.clone()), "{topic}" }
    }
}

#[component]
fn QuestionRow(row: QuestionRowVm, on_toggle: EventHandler<QuestionId>) -> Element {
    let id = row.id.clone();
    let row_class = if row.solved { "solved" } else { "" };
    rsx! {
        tr { class: row_class,
            td {
                input {
                    r#type: "checkbox",
                    checked: row.solved,
                    onchange: move |_| on_toggle.call(id.clone()),
                }
            }
            td {
                a { href: "{row.href}", target: "_blank", "{row.title}" }
                if row.premium {
                    span { class: "badge premium", "Premium" }
                }
            }
            td { "{row.company}" }
            td { span { class: "difficulty {row.difficulty_class}", "{row.difficulty_label}" } }
            td { "{row.acceptance_label}" }
            td { "{row.frequency_label}" }
            td { class: "topics-cell", "{row.topics_label}" }
        }
    }
}
