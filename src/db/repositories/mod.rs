mod items;
mod labels;
