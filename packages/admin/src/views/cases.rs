use client::models::CaseStudy;
use dioxus::prelude::*;
use ui::{format, ResourceAdmin};

#[component]
pub fn Cases() -> Element {
    rsx! {
        ResourceAdmin::<CaseStudy> {
            title: "Manage Cases",
            noun: "case",
            columns: vec![
                "Title",
                "Technologies",
                "Figma",
                "Built",
                "Added",
                "Before",
                "Solved",
                "Author",
                "Image",
            ],
            render_row: Callback::new(|case: CaseStudy| {
                let technologies = format::excerpt(&case.technologies, 6);
                let figma = format::excerpt(&case.figma_provider, 6);
                let built = format::excerpt(&case.what_was_build, 6);
                let added = format::excerpt(&case.what_we_added, 6);
                let before = format::excerpt(&case.problem_before, 6);
                let solved = format::excerpt(&case.problem_solved, 6);
                rsx! {
                    td { "{case.title}" }
                    td {
                        span { title: "{case.technologies}", "{technologies}" }
                    }
                    td {
                        span { title: "{case.figma_provider}", "{figma}" }
                    }
                    td {
                        span { title: "{case.what_was_build}", "{built}" }
                    }
                    td {
                        span { title: "{case.what_we_added}", "{added}" }
                    }
                    td {
                        span { title: "{case.problem_before}", "{before}" }
                    }
                    td {
                        span { title: "{case.problem_solved}", "{solved}" }
                    }
                    td { "{case.author}" }
                    td {
                        img { class: "thumb", src: "{case.image}", alt: "{case.title}" }
                    }
                }
            }),
            render_card: Callback::new(|case: CaseStudy| rsx! {
                h3 { "{case.title}" }
                p { "Technologies: {case.technologies}" }
                p { "By {case.author}" }
            }),
        }
    }
}
