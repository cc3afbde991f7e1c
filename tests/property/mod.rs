mod delay_ranges;
mod prefix_typing;
