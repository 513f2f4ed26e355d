pub mod prompts;
pub mod render;
pub mod spinner;

pub use prompts::{
    prompt_category, prompt_dish_name, prompt_menu_action, prompt_preference, prompt_yes_no,
    MenuAction,
};
pub use render::{
    display_category_header, display_dish_list, display_prizes, display_sectors,
    display_winner, draw_spin_frame,
};
pub use spinner::{run_spin, SpinMode};
