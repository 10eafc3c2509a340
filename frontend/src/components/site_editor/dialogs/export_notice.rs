use crate::components::site_editor::{Msg, SiteEditor};
use crate::tops_sheet::top_sheet::TopSheet;
use yew::html::Scope;
use yew::prelude::*;

/// Explains how to put a downloaded data file back into the site.
pub fn export_notice(component: &SiteEditor, link: &Scope<SiteEditor>, file_name: &str) -> Html {
    let target = file_name.trim_end_matches('.');
    html! {
        <TopSheet node_ref={component.export_notice_ref.clone()}>
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;display:flex;align-items:center;justify-content:center;">
                <div style="background:#fff;border-radius:8px;padding:24px 32px;max-width:480px;">
                    <h3 style="margin-top:0;">{"数据已下载"}</h3>
                    <ol>
                        <li>{"如果下载的文件名带有后缀（如 .txt），请手动删除后缀"}</li>
                        <li>{format!("确保最终文件名为 \"{}\"（无任何扩展名）", target)}</li>
                        <li>{"将文件替换到网站根目录以更新数据"}</li>
                    </ol>
                    <div style="text-align:right;">
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::CloseExportNotice)}>
                            {"知道了"}
                        </button>
                    </div>
                </div>
            </div>
        </TopSheet>
    }
}
