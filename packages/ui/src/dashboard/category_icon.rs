use dioxus::prelude::*;

use crate::format::CategoryIcon;
use crate::icons::{
    FaBagShopping, FaBook, FaCar, FaFilm, FaHospital, FaHouse, FaLightbulb, FaSackDollar,
    FaUtensils,
};
use crate::Icon;

/// Icon for a spending category, picked by keyword.
#[component]
pub fn CategoryIconView(category: Option<String>, #[props(default = 20)] size: u32) -> Element {
    match CategoryIcon::for_category(category.as_deref()) {
        CategoryIcon::Food => rsx! { Icon { icon: FaUtensils, width: size, height: size } },
        CategoryIcon::Transport => rsx! { Icon { icon: FaCar, width: size, height: size } },
        CategoryIcon::Housing => rsx! { Icon { icon: FaHouse, width: size, height: size } },
        CategoryIcon::Entertainment => rsx! { Icon { icon: FaFilm, width: size, height: size } },
        CategoryIcon::Health => rsx! { Icon { icon: FaHospital, width: size, height: size } },
        CategoryIcon::Education => rsx! { Icon { icon: FaBook, width: size, height: size } },
        CategoryIcon::Shopping => rsx! { Icon { icon: FaBagShopping, width: size, height: size } },
        CategoryIcon::Utilities => rsx! { Icon { icon: FaLightbulb, width: size, height: size } },
        CategoryIcon::General => rsx! { Icon { icon: FaSackDollar, width: size, height: size } },
    }
}
