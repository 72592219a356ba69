pub const DEFAULT_NOTICE: &str = "O nouă carte a fost adăugată în bibliotecă!";
pub const DEFAULT_SUBSCRIBERS: usize = 2;

pub struct Config {
    /// Hides the banner printed on startup.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers and tips, 2 keeps only results.
    pub quiet: u8,
    /// Number of stock library users subscribed at startup.
    pub subscribers: usize,
    /// Message broadcast to subscribers whenever a book is added.
    pub notice: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            subscribers: DEFAULT_SUBSCRIBERS,
            notice: DEFAULT_NOTICE.to_string(),
        }
    }
}
