use askama::Template;

use crate::assets::AssetTag;

#[derive(Template)]
#[template(path = "preview.html")]
pub struct PreviewPageTemplate {
    pub lang: String,
    pub title: String,
    pub head_assets: Vec<AssetTag>,
    pub module_html: String,
}
