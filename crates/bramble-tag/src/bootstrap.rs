use bramble_core::BrambleResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

pub const LOADER_BASE_URL: &str = "https://www.googletagmanager.com/gtag/js";

// the vendor bootstrap: one async loader reference plus a two-call command
// queue, an initialization call carrying the current timestamp and a
// configuration call carrying the tag identifier
#[derive(Debug, Clone, Serialize)]
pub struct LoaderBootstrap {
    pub script_src: Url,
    pub commands: Vec<TagCommand>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum TagCommand {
    Init { at: DateTime<Utc> },
    Config { tag_id: String },
}

pub fn bootstrap(tag_id: &str) -> BrambleResult<LoaderBootstrap> {
    let script_src = Url::parse_with_params(LOADER_BASE_URL, [("id", tag_id)])?;

    Ok(LoaderBootstrap {
        script_src,
        commands: vec![
            TagCommand::Init { at: Utc::now() },
            TagCommand::Config {
                tag_id: tag_id.to_string(),
            },
        ],
    })
}

pub fn render_bootstrap(tag_id: &str) -> BrambleResult<String> {
    let boot = bootstrap(tag_id)?;

    Ok(format!(
        concat!(
            "<script async src=\"{src}\"></script>",
            "<script>window.dataLayer=window.dataLayer||[];",
            "function gtag(){{dataLayer.push(arguments);}}",
            "gtag('js',new Date());gtag('config','{id}');</script>"
        ),
        src = boot.script_src,
        id = tag_id
    ))
}

pub fn inject_bootstrap(html: &str, tag_id: &str) -> BrambleResult<String> {
    let markup = render_bootstrap(tag_id)?;

    Ok(match html.find("</head>").or_else(|| html.find("</body>")) {
        Some(pos) => {
            let mut result = String::with_capacity(html.len() + markup.len());
            result.push_str(&html[..pos]);
            result.push_str(&markup);
            result.push_str(&html[pos..]);
            result
        }
        None => format!("{}{}", html, markup),
    })
}
