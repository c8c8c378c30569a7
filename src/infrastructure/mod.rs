mod clients;
pub(crate) mod parsers;

pub use clients::community::{
    CommunityClient, ProfilePage, ProfilePages, DEFAULT_BASE_URL,
};
pub use parsers::{
    aliases::parse_aliases,
    badges::{BadgesParser, CreationTimeParser},
    games::GamesParser,
    main_page::{MainPage, MainPageParser},
    text::{make_float, make_int, parse_price, remove_all_ws},
    wishlist::WishlistParser,
    PageParser,
};
