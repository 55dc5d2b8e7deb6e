//! Header component for the HRMS Pro console

use crate::api::HrmsApi;
use crate::app::App;
use crate::models::View;

impl<A: HrmsApi> App<A> {
    pub fn render_header(&self) -> String {
        let theme = &self.theme;

        let nav: Vec<String> = View::ALL
            .iter()
            .map(|view| {
                if *view == self.view {
                    theme.paint(&format!("[{}]", view.title()), theme.info)
                } else {
                    theme.paint(view.title(), theme.foreground_dim)
                }
            })
            .collect();

        let search = if self.search_term.is_empty() {
            theme.paint("Search ID or Name...", theme.foreground_muted)
        } else {
            format!("search: {}", self.search_term)
        };

        format!(
            "{}  {}\n{}   {}   date: {}\n",
            theme.bold(&theme.paint("HRMS", theme.foreground)),
            theme.paint("Pro", theme.info),
            nav.join("  "),
            search,
            self.selected_date.format("%Y-%m-%d"),
        )
    }
}
