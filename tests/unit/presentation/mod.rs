mod test_chart;
mod test_formatters;
mod test_normalize;
mod test_routes;
