use anyhow::Result;
use remedy_core::{materia_medica_slug, materia_medica_url};
use serde::Serialize;

use crate::print_json;

#[derive(Serialize)]
struct MateriaLink<'a> {
    latin: &'a str,
    slug: String,
    url: String,
}

pub(crate) fn run_materia(latin: &str) -> Result<()> {
    let (Some(slug), Some(url)) = (materia_medica_slug(latin), materia_medica_url(latin)) else {
        anyhow::bail!("no Materia Medica slug can be derived from {latin:?}");
    };
    print_json(&MateriaLink { latin, slug, url })
}
