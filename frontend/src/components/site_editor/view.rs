//! View rendering for the site editor component.
//!
//! Scalar fields are grouped into fixed sections. Products and news are
//! rendered from the form's entry lists: each entry is keyed by its stable
//! `ItemId`, while its element ids (`product2Name`, `news1Date`, ...) follow
//! its current position. Position 1 never gets a delete button.

use common::binder::{ListEntry, ListKind, SiteForm};
use common::model::field::{ControlKind, ScalarField};
use common::model::news::{NewsField, NewsItem};
use common::model::product::{Product, ProductField};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::field_grid::FieldGrid;

use super::dialogs::export_notice::export_notice;
use super::messages::Msg;
use super::state::SiteEditor;

const BASIC_FIELDS: [ScalarField; 3] = [
    ScalarField::SiteTitle,
    ScalarField::CompanyName,
    ScalarField::CompanyDescription,
];

const CONTACT_FIELDS: [ScalarField; 4] = [
    ScalarField::CompanyAddress,
    ScalarField::CompanyPhone,
    ScalarField::CompanyEmail,
    ScalarField::WorkHours,
];

const SOCIAL_FIELDS: [ScalarField; 4] = [
    ScalarField::WechatQrCode,
    ScalarField::WechatLink,
    ScalarField::WeiboLink,
    ScalarField::LinkedinLink,
];

const THEME_FIELDS: [ScalarField; 4] = [
    ScalarField::PrimaryColor,
    ScalarField::AccentColor,
    ScalarField::DarkColor,
    ScalarField::LightColor,
];

pub fn view(component: &SiteEditor, ctx: &Context<SiteEditor>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    html! {
        <div class="admin-root">
            <div class="admin-header">
                <h1>{"网站内容管理"}</h1>
                {
                    match component.source {
                        Some(source) => html! { <span class="source-label">{format!("数据来源: {}", source)}</span> },
                        None => html! { <span class="source-label">{"加载中..."}</span> },
                    }
                }
                <button id="saveBtn" class="btn btn-primary" onclick={link.callback(|_| Msg::Save)}>
                    {"保存更改"}
                </button>
            </div>
            { build_scalar_section("basic", "基本信息", &BASIC_FIELDS, form, link) }
            { build_scalar_section("contact", "联系信息", &CONTACT_FIELDS, form, link) }
            { build_scalar_section("social", "社交媒体", &SOCIAL_FIELDS, form, link) }
            { build_scalar_section("theme", "主题设置", &THEME_FIELDS, form, link) }
            { build_list_section(ListKind::Products, form.products().entries(), link, build_product) }
            { build_list_section(ListKind::News, form.news().entries(), link, build_news_item) }
            { export_notice(component, link, &ctx.props().config.export_file_name) }
        </div>
    }
}

fn build_scalar_section(
    id: &'static str,
    title: &'static str,
    fields: &[ScalarField],
    form: &SiteForm,
    link: &Scope<SiteEditor>,
) -> Html {
    html! {
        <section id={id} class="admin-section">
            <h2>{title}</h2>
            <FieldGrid>
                { for fields.iter().map(|field| build_scalar_field(*field, form.value(*field), link)) }
            </FieldGrid>
        </section>
    }
}

fn build_scalar_field(field: ScalarField, value: &str, link: &Scope<SiteEditor>) -> Html {
    let control = match field.control_kind() {
        ControlKind::TextArea => html! {
            <textarea
                id={field.control_id()}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::SetField(field, e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        },
        kind => html! {
            <input
                type={if kind == ControlKind::Color { "color" } else { "text" }}
                id={field.control_id()}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::SetField(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        },
    };
    let wide = field.control_kind() == ControlKind::TextArea;

    html! {
        <div class={classes!("field", wide.then_some("wide"))}>
            <label for={field.control_id()}>{field.label()}</label>
            { control }
        </div>
    }
}

/// Renders a list section: heading, one sub-form per entry, then the add
/// button. `build_entry` renders the fields of a single entry.
fn build_list_section<T>(
    kind: ListKind,
    entries: &[ListEntry<T>],
    link: &Scope<SiteEditor>,
    build_entry: fn(&ListEntry<T>, usize, &Scope<SiteEditor>) -> Html,
) -> Html {
    html! {
        <section id={kind.section_id()} class="admin-section">
            <h2>{kind.section_title()}</h2>
            {
                for entries.iter().enumerate().map(|(index, entry)| {
                    let position = index + 1;
                    let id = entry.id;
                    html! {
                        <div key={id.to_string()} class="list-item">
                            <h3>{kind.heading(position)}</h3>
                            { build_entry(entry, position, link) }
                            {
                                if SiteForm::shows_delete_control(position) {
                                    html! {
                                        <div style="text-align:right;margin-top:16px;">
                                            <button
                                                class="btn btn-delete"
                                                data-index={position.to_string()}
                                                onclick={link.callback(move |_| Msg::DeleteItem(kind, id))}
                                            >
                                                {kind.delete_label()}
                                            </button>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                })
            }
            <button class="btn btn-add" onclick={link.callback(move |_| Msg::AddItem(kind))}>
                {kind.add_label()}
            </button>
        </section>
    }
}

fn build_product(entry: &ListEntry<Product>, position: usize, link: &Scope<SiteEditor>) -> Html {
    let id = entry.id;
    html! {
        <FieldGrid>
            {
                for ProductField::ALL.into_iter().map(|field| {
                    let control_id = ListKind::Products.control_id(position, field.control_suffix());
                    let value = field.get(&entry.item).to_string();
                    if field == ProductField::Description {
                        text_area(control_id, field.label(), value, link.callback(move |e: InputEvent| {
                            Msg::SetProductField(id, field, e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        }))
                    } else {
                        text_input(control_id, field.label(), "text", value, link.callback(move |e: InputEvent| {
                            Msg::SetProductField(id, field, e.target_unchecked_into::<HtmlInputElement>().value())
                        }))
                    }
                })
            }
        </FieldGrid>
    }
}

fn build_news_item(entry: &ListEntry<NewsItem>, position: usize, link: &Scope<SiteEditor>) -> Html {
    let id = entry.id;
    html! {
        <FieldGrid>
            {
                for NewsField::ALL.into_iter().map(|field| {
                    let control_id = ListKind::News.control_id(position, field.control_suffix());
                    let value = field.get(&entry.item).to_string();
                    match field {
                        NewsField::Summary => text_area(control_id, field.label(), value, link.callback(move |e: InputEvent| {
                            Msg::SetNewsField(id, field, e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })),
                        _ => {
                            let input_type = if field == NewsField::Date { "date" } else { "text" };
                            text_input(control_id, field.label(), input_type, value, link.callback(move |e: InputEvent| {
                                Msg::SetNewsField(id, field, e.target_unchecked_into::<HtmlInputElement>().value())
                            }))
                        }
                    }
                })
            }
        </FieldGrid>
    }
}

fn text_input(
    control_id: String,
    label: &'static str,
    input_type: &'static str,
    value: String,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="field">
            <label for={control_id.clone()}>{label}</label>
            <input type={input_type} id={control_id} value={value} oninput={oninput} />
        </div>
    }
}

fn text_area(
    control_id: String,
    label: &'static str,
    value: String,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="field wide">
            <label for={control_id.clone()}>{label}</label>
            <textarea id={control_id} value={value} oninput={oninput} />
        </div>
    }
}
