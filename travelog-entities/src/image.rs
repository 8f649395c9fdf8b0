use crate::id::ImageId;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id    : Option<ImageId>,
    pub url   : String,
    /// Position within the travelogue, starting at 0
    pub order : u32,
}

/// Assigns consecutive positions in the given order.
pub fn ordered_images<I, S>(urls: I) -> Vec<Image>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    urls.into_iter()
        .enumerate()
        .map(|(order, url)| Image {
            id: None,
            url: url.into(),
            order: order as u32,
        })
        .collect()
}
