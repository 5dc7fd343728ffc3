use crate::types::AssetKey;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};

pub struct AssetKeyList<'a> {
    keys: &'a [&'a AssetKey],
    selected_idx: Option<usize>,
}

impl<'a> AssetKeyList<'a> {
    pub fn new(keys: &'a [&'a AssetKey], selected_idx: Option<usize>) -> Self {
        Self { keys, selected_idx }
    }
}

impl Widget for AssetKeyList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .keys
            .iter()
            .map(|key| {
                let Some((leaf, prefix)) = key.path.split_last() else {
                    return ListItem::new(Line::default());
                };

                // Dim the namespace so the leaf name stands out
                let mut spans: Vec<Span> = prefix
                    .iter()
                    .map(|segment| {
                        Span::styled(format!("{}/", segment), Style::default().fg(Color::DarkGray))
                    })
                    .collect();
                spans.push(Span::raw(leaf.as_str()));
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let mut list_state = ListState::default();
        list_state.select(self.selected_idx);

        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
