/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Authenticated HTTP transport
pub mod http;
/// List parameters and pagination metadata
pub mod pagination;
/// Request bodies that are not plain resource records
pub mod requests;
/// Response envelopes
pub mod responses;
