pub mod rdf_parser;
pub mod star_query_parser;
