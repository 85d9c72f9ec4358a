//! Detail pages for a single place or school path.

use dioxus::prelude::*;

use common::catalog::{CatalogKind, CatalogRecord};

use crate::{data_definitions::directory_catalogs::DirectoryCatalogs, routes::Route};


#[component]
pub fn PlaceDetailPage(id: String) -> Element {
    rsx! {
        RecordDetail { kind: CatalogKind::Places, id }
    }
}

#[component]
pub fn SchoolDetailPage(id: String) -> Element {
    rsx! {
        RecordDetail { kind: CatalogKind::SchoolPaths, id }
    }
}

#[component]
fn RecordDetail(kind: CatalogKind, id: ReadSignal<String>) -> Element {
    let catalogs = use_context::<DirectoryCatalogs>();
    let record = use_memo(move || catalogs.catalog(kind).find_by_key(&id.read()).cloned());
    let back_to = match kind {
        CatalogKind::Places => Route::PlacesPage {},
        CatalogKind::SchoolPaths => Route::PathsPage {},
    };

    let Some(record) = record() else {
        dioxus::logger::tracing::warn!("no {:?} record with id {}", kind, id.read());
        return rsx! {
            div {
                style: "display: flex; flex-direction: column; gap: 16px; padding: 32px;",
                h2 { "お探しの情報が見つかりませんでした" }
                Link { to: back_to.clone(), class: "x-text-link", "一覧に戻る" }
            }
        };
    };

    rsx! {
        Title { "{record.title}" }
        div {
            id: "x-record-detail",
            style: "display: flex; flex-direction: column; gap: 16px; padding: 24px; max-width: 860px; margin: 0 auto;",
            Link { to: back_to, class: "x-text-link", "一覧に戻る" }
            h1 { style: "margin: 0; font-size: 28px;", "{record.title}" }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 6px;",
                for tag in record.tags.iter() {
                    span {
                        key: "{tag}",
                        style: "padding: 2px 8px; border-radius: 4px; background-color: #F2F2F2; font-size: 13px;",
                        "{tag}"
                    }
                }
            }
            p { style: "white-space: pre-line; line-height: 1.7;", "{record.body}" }
            DetailTable { record: record.clone() }
        }
    }
}

fn detail_label(field: &str) -> &str {
    match field {
        "location" => "所在地",
        "target" => "対象",
        "schedule" => "開催日時",
        "fee" => "費用",
        "website" => "ウェブサイト",
        "recommended" => "こんな方におすすめ",
        "suggestion" => "区分",
        "style" => "授業スタイル",
        "frequency" => "登校頻度",
        "exam" => "入試",
        "campus" => "福井のキャンパス",
        other => other,
    }
}

#[component]
fn DetailTable(record: ReadSignal<CatalogRecord>) -> Element {
    let rows = use_memo(move || {
        let record = record.read();
        let mut rows: Vec<(String, String)> = Vec::new();
        if let Some(address) = &record.address {
            rows.push(("住所".to_string(), address.clone()));
        }
        if let Some(hours) = &record.hours {
            rows.push(("開所時間".to_string(), hours.clone()));
        }
        rows.extend(
            record
                .detail_info
                .iter()
                .filter(|(_, v)| !v.trim().is_empty())
                .map(|(k, v)| (detail_label(k).to_string(), v.clone())),
        );
        rows
    });

    if rows.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        table {
            style: "border-collapse: collapse; width: 100%;",
            tbody {
                for (label, value) in rows() {
                    tr {
                        key: "{label}",
                        th {
                            style: "text-align: left; padding: 8px; border-bottom: 1px solid #E0E0E0; width: 30%; color: #555555; font-weight: 500;",
                            "{label}"
                        }
                        td {
                            style: "padding: 8px; border-bottom: 1px solid #E0E0E0; white-space: pre-line;",
                            "{value}"
                        }
                    }
                }
            }
        }
    }
}
