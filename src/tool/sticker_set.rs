/// Stickers offered in the tool panel: the built-ins followed by any
/// custom ones added this session, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickerSet {
    stickers: Vec<String>,
}

impl StickerSet {
    pub fn new(builtin: impl IntoIterator<Item = String>) -> Self {
        Self {
            stickers: builtin.into_iter().collect(),
        }
    }

    /// Append a user-supplied sticker exactly as typed. Duplicates are
    /// allowed; blank input is ignored and reported as `None`.
    pub fn add_custom(&mut self, text: &str) -> Option<&str> {
        if text.trim().is_empty() {
            return None;
        }
        self.stickers.push(text.to_owned());
        self.stickers.last().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.stickers.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stickers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_stickers_append_without_dedup() {
        let mut set = StickerSet::new(vec!["⭐".to_owned()]);
        assert_eq!(set.add_custom("🐸"), Some("🐸"));
        assert_eq!(set.add_custom("🐸"), Some("🐸"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["⭐", "🐸", "🐸"]);
    }

    #[test]
    fn test_blank_custom_sticker_is_ignored() {
        let mut set = StickerSet::new(Vec::new());
        assert_eq!(set.add_custom(""), None);
        assert_eq!(set.add_custom("   "), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_custom_sticker_is_stored_as_typed() {
        let mut set = StickerSet::new(Vec::new());
        assert_eq!(set.add_custom(" ⭐ "), Some(" ⭐ "));
        assert_eq!(set.get(0), Some(" ⭐ "));
    }
}
