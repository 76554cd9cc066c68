//! Fixed image catalog and selection toggling.
//!
//! The catalog is a compile-time constant; selections are plain URL
//! lists owned by the preferences slice. URLs in the catalog are unique,
//! so a selection can never hold duplicates.

/// One selectable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub url: &'static str,
    pub title: &'static str,
}

/// The nine selectable images shown on the preferences step.
pub const CATALOG: [GalleryImage; 9] = [
    GalleryImage {
        url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=300&fit=crop",
        title: "Mountain Landscape",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=400&h=300&fit=crop",
        title: "Forest Path",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=400&h=300&fit=crop",
        title: "Ocean Waves",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1472214103451-9374bd1c798e?w=400&h=300&fit=crop",
        title: "Desert Dunes",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=400&h=300&fit=crop",
        title: "City Skyline",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1501594907352-04cda38ebc29?w=400&h=300&fit=crop",
        title: "Tropical Beach",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1507041957456-9c397ce39c97?w=400&h=300&fit=crop",
        title: "Autumn Forest",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1464822759844-d150baec3e5d?w=400&h=300&fit=crop",
        title: "Snow Mountains",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1493246507139-91e8fad9978e?w=400&h=300&fit=crop",
        title: "Flower Field",
    },
];

/// Look up the catalog title for a selected URL, if it is a catalog image.
pub fn title_for(url: &str) -> Option<&'static str> {
    CATALOG.iter().find(|image| image.url == url).map(|i| i.title)
}

/// Toggle membership of `url` in a selection list.
///
/// Removes the single occurrence if present, else appends. Selection
/// order is preserved for the remaining entries.
pub fn toggle_image(selection: &mut Vec<String>, url: &str) {
    if let Some(pos) = selection.iter().position(|selected| selected == url) {
        selection.remove(pos);
    } else {
        selection.push(url.to_string());
    }
}
