//! Full-screen image viewer with share and download helpers.

use url::Url;

use folio_config::LightboxSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxImage {
    pub url: Url,
    pub caption: String,
}

impl LightboxImage {
    pub fn new(url: Url, caption: impl Into<String>) -> Self {
        Self {
            url,
            caption: caption.into(),
        }
    }
}

/// Share targets for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub facebook: Url,
    pub x: Url,
    pub linkedin: Url,
    pub whatsapp: Url,
    /// `mailto:` link. Kept as a string since it has no host.
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct Lightbox {
    images: Vec<LightboxImage>,
    /// Index of the image on screen; `None` while closed.
    open: Option<usize>,
    site_url: Option<Url>,
    share_text: String,
}

impl Lightbox {
    pub fn new(images: Vec<LightboxImage>, settings: &LightboxSettings) -> Self {
        Self {
            images,
            open: None,
            site_url: settings.site_url.clone(),
            share_text: settings.share_text.clone(),
        }
    }

    pub fn images(&self) -> &[LightboxImage] {
        &self.images
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.open
    }

    pub fn current(&self) -> Option<&LightboxImage> {
        self.open.and_then(|i| self.images.get(i))
    }

    /// Show image `index`. Returns false (and stays as it was) when the index
    /// is out of range.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            log::warn!("lightbox has no image {index} ({} total)", self.images.len());
            return false;
        }
        self.open = Some(index);
        true
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.open {
            self.open = Some((i + 1) % self.images.len());
        }
    }

    pub fn previous(&mut self) {
        if let Some(i) = self.open {
            let len = self.images.len();
            self.open = Some((i + len - 1) % len);
        }
    }

    /// Share targets for the image on screen, linking back to `page_url`.
    pub fn share_links(&self, page_url: &Url) -> Option<ShareLinks> {
        let image = self.current()?;
        let text = if image.caption.is_empty() {
            self.share_text.clone()
        } else {
            format!("{}: {}", self.share_text, image.caption)
        };
        share_links(page_url, &text).ok()
    }

    /// Share targets linking to the configured site, or to the image itself
    /// when no site URL is set.
    pub fn share(&self) -> Option<ShareLinks> {
        let target = match &self.site_url {
            Some(url) => url.clone(),
            None => self.current()?.url.clone(),
        };
        self.share_links(&target)
    }

    /// File name offered when the image on screen is downloaded.
    pub fn download_name(&self) -> Option<String> {
        let index = self.open?;
        let image = self.images.get(index)?;
        Some(download_name(&image.url, index))
    }
}

/// Build share URLs for `page_url` with `text` as the accompanying message.
pub fn share_links(page_url: &Url, text: &str) -> Result<ShareLinks, url::ParseError> {
    let link = page_url.as_str();
    Ok(ShareLinks {
        facebook: Url::parse_with_params(
            "https://www.facebook.com/sharer/sharer.php",
            &[("u", link)],
        )?,
        x: Url::parse_with_params(
            "https://twitter.com/intent/tweet",
            &[("url", link), ("text", text)],
        )?,
        linkedin: Url::parse_with_params(
            "https://www.linkedin.com/sharing/share-offsite/",
            &[("url", link)],
        )?,
        whatsapp: Url::parse_with_params(
            "https://wa.me/",
            &[("text", format!("{text} {link}").as_str())],
        )?,
        email: format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(text),
            urlencoding::encode(link)
        ),
    })
}

/// Last path segment of `url`, percent-decoded. Falls back to
/// `image-<n>.jpg` (1-based) when the URL has no usable file name.
pub fn download_name(url: &Url, index: usize) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .and_then(|segment| urlencoding::decode(segment).ok())
        .map(|name| name.into_owned())
        .filter(|name| !name.contains('/'))
        .unwrap_or_else(|| format!("image-{}.jpg", index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("valid test url")
    }

    fn gallery() -> Lightbox {
        Lightbox::new(
            vec![
                LightboxImage::new(url("https://example.org/media/team%20photo.jpg"), "Team"),
                LightboxImage::new(url("https://example.org/media/"), ""),
                LightboxImage::new(url("https://example.org/media/stage.png"), "Stage"),
            ],
            &LightboxSettings::default(),
        )
    }

    #[test]
    fn closed_lightbox_has_nothing_current() {
        let mut lightbox = gallery();
        assert!(lightbox.current().is_none());
        lightbox.next();
        assert!(!lightbox.is_open());
        assert!(!lightbox.open(3));
        assert!(lightbox.download_name().is_none());
    }

    #[test]
    fn navigation_wraps() {
        let mut lightbox = gallery();
        assert!(lightbox.open(0));
        lightbox.previous();
        assert_eq!(lightbox.current_index(), Some(2));
        lightbox.next();
        assert_eq!(lightbox.current().map(|i| i.caption.as_str()), Some("Team"));
        lightbox.close();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn download_names_decode_or_fall_back() {
        let mut lightbox = gallery();
        lightbox.open(0);
        assert_eq!(lightbox.download_name().as_deref(), Some("team photo.jpg"));
        lightbox.open(1);
        assert_eq!(lightbox.download_name().as_deref(), Some("image-2.jpg"));
        assert_eq!(
            download_name(&url("https://example.org"), 4),
            "image-5.jpg"
        );
    }

    #[test]
    fn share_links_encode_their_parameters() {
        let page = url("https://example.org/cv?lang=en");
        let links = share_links(&page, "Look & see").expect("share links");
        assert_eq!(
            links.facebook.as_str(),
            concat!(
                "https://www.facebook.com/sharer/sharer.php",
                "?u=https%3A%2F%2Fexample.org%2Fcv%3Flang%3Den"
            )
        );
        assert_eq!(
            links.x.query_pairs().find(|(k, _)| k == "text").map(|(_, v)| v.into_owned()),
            Some("Look & see".to_string())
        );
        assert_eq!(links.linkedin.host_str(), Some("www.linkedin.com"));
        assert!(links.whatsapp.as_str().starts_with("https://wa.me/?text="));
        assert_eq!(
            links.email,
            "mailto:?subject=Look%20%26%20see&body=https%3A%2F%2Fexample.org%2Fcv%3Flang%3Den"
        );
    }

    #[test]
    fn share_falls_back_to_the_image_url() {
        let mut lightbox = gallery();
        lightbox.open(2);
        let links = lightbox.share().expect("open lightbox shares");
        let linked = links.linkedin.as_str();
        assert!(linked.ends_with("url=https%3A%2F%2Fexample.org%2Fmedia%2Fstage.png"));

        let settings = LightboxSettings {
            site_url: Some(url("https://portfolio.example.com/")),
            ..LightboxSettings::default()
        };
        let mut lightbox = Lightbox::new(gallery().images().to_vec(), &settings);
        assert!(lightbox.share().is_none());
        lightbox.open(0);
        let links = lightbox.share().expect("open lightbox shares");
        assert!(links.facebook.as_str().ends_with("u=https%3A%2F%2Fportfolio.example.com%2F"));
    }

    #[test]
    fn share_text_includes_caption() {
        let mut lightbox = gallery();
        lightbox.open(2);
        let links = lightbox
            .share_links(&url("https://example.org/"))
            .expect("open lightbox shares");
        let text = links
            .x
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned());
        assert_eq!(text, Some(format!("{}: Stage", LightboxSettings::default().share_text)));
    }
}
