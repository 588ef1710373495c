use crate::pokebase::Session;

use bytes::Bytes;
use std::fmt;
use std::io;
use tokio::task;

#[derive(Clone)]
pub struct Artwork {
    pub width: u32,
    pub height: u32,
    pub rgba: Bytes,
}

impl Artwork {
    pub fn fetch<'a>(
        url: &str,
        session: &Session,
    ) -> impl Future<Output = Result<Self, anywho::Error>> + 'a {
        let url = url.to_owned();
        let session = session.clone();

        async move {
            let bytes = session.download_artwork(&url).await?;

            // Decode image as RGBA in a background blocking thread
            task::spawn_blocking(move || {
                let image = image::ImageReader::new(io::Cursor::new(bytes))
                    .with_guessed_format()?
                    .decode()?
                    .to_rgba8();

                Ok(Artwork {
                    width: image.width(),
                    height: image.height(),
                    rgba: Bytes::from(image.into_raw()),
                })
            })
            .await?
        }
    }
}

impl fmt::Debug for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artwork")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba", &self.rgba.len())
            .finish()
    }
}
