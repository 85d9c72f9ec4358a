use dioxus::prelude::*;

use common::catalog::{CatalogKind, CatalogRecord};

use crate::routes::Route;


/// One result in a directory list, linking to the record's detail page.
#[component]
pub fn RecordCard(kind: CatalogKind, record: ReadSignal<CatalogRecord>) -> Element {
    let to = Route::record_detail(kind, &record.read().id);
    let record = record.read().clone();

    rsx! {
        Link {
            to,
            class: "x-card-link",
            div {
                class: "x-record-card",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    padding: 16px;
                    border: 1px solid #E0E0E0;
                    border-radius: 12px;
                    background-color: #FFFFFF;
                ",
                h3 { style: "margin: 0; font-size: 18px;", "{record.title}" }
                if !record.tags.is_empty() {
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 6px;",
                        for tag in record.tags.iter() {
                            span {
                                key: "{tag}",
                                style: "padding: 2px 8px; border-radius: 4px; background-color: #F2F2F2; font-size: 12px;",
                                "{tag}"
                            }
                        }
                    }
                }
                p {
                    style: "margin: 0; font-size: 14px; color: #555555; white-space: pre-line;",
                    "{record.body}"
                }
            }
        }
    }
}
