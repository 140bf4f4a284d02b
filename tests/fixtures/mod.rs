//! Title and search pages shared by the integration tests.

#![allow(dead_code)]

pub const MATRIX_URL: &str = "http://example.com/title/tt0133093/";

/// A title page in the table-based overview layout.
pub const MATRIX_OVERVIEW: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>The Matrix (1999) - IMDb</title>
  <link rel="canonical" href="http://example.com/title/tt0133093/">
</head>
<body>
<table id="title-overview-widget-layout">
  <tr>
    <td id="img_primary" rowspan="2">
      <div class="image">
        <a href="/media/rm1/tt0133093"><img src="http://ia.example.com/matrix.jpg" alt="The Matrix Poster"></a>
      </div>
    </td>
    <td id="overview-top">
      <h1 class="header">
        <span class="itemprop" itemprop="name">The Matrix</span>
        <span class="nobr">(<a href="/year/1999/">1999</a>)</span>
      </h1>
      <div class="infobar">
        <time itemprop="duration" datetime="PT136M">136 min</time> -
        <a href="/genre/Action">Action</a> |
        <a href="/genre/Adventure">Adventure</a> |
        <a href="/genre/Sci-Fi">Sci-Fi</a>
      </div>
      <div class="star-box">
        <span itemprop="ratingValue">8.7</span>/10 from
        <span itemprop="ratingCount">1,024,711</span> users
      </div>
      <div class="txt-block">
        <h4 class="inline">Directors:</h4>
        <a href="/name/nm0905152/">Andy Wachowski</a>, <a href="/name/nm0905154/">Lana Wachowski</a>
      </div>
      <div class="txt-block">
        <h4 class="inline">Writers:</h4>
        <a href="/name/nm0905152/">Andy Wachowski</a>, <a href="/name/nm0905154/">Lana Wachowski</a>
      </div>
      <div class="txt-block">
        <h4 class="inline">Stars:</h4>
        <a href="/name/nm0000206/">Keanu Reeves</a>, <a href="/name/nm0000401/">Laurence Fishburne</a>
      </div>
    </td>
  </tr>
</table>

<div class="article">
  <h2>Cast</h2>
  <table class="cast_list">
    <tr class="odd">
      <td class="primary_photo"><a href="/name/nm0000206/"><img src="spacer.gif" loadlate="http://ia.example.com/keanu.jpg"></a></td>
      <td class="name" itemprop="actor"><a href="/name/nm0000206/"><span itemprop="name">Keanu Reeves</span></a></td>
      <td class="ellipsis">...</td>
      <td class="character"><div><a href="/character/ch0000741/">Neo</a></div></td>
    </tr>
    <tr class="even">
      <td class="primary_photo"><a href="/name/nm0000401/"><img src="spacer.gif" loadlate="http://ia.example.com/laurence.jpg"></a></td>
      <td class="name" itemprop="actor"><a href="/name/nm0000401/"><span itemprop="name">Laurence Fishburne</span></a></td>
      <td class="ellipsis">...</td>
      <td class="character"><div><a href="/character/ch0000746/">Morpheus</a></div></td>
    </tr>
    <tr class="odd">
      <td class="primary_photo"><a href="/name/nm0005251/"><img src="http://ia.example.com/carrie.jpg"></a></td>
      <td class="name" itemprop="actor"><a href="/name/nm0005251/"><span itemprop="name">Carrie-Anne Moss</span></a></td>
      <td class="ellipsis">...</td>
      <td class="character"><div><a href="/character/ch0000742/">Trinity</a></div></td>
    </tr>
  </table>
</div>

<div class="article">
  <h2>Storyline</h2>
  <div class="inline canwrap">
    <p>Thomas A. Anderson is a man living two lives.
By day he is an average computer programmer.
      <em class="nobr">Written by <a href="/user/ur1/">redcommander27</a></em>
    </p>
    <p>Second paragraph is ignored.</p>
  </div>
</div>

<div class="article">
  <h2>Details</h2>
  <div class="txt-block">
    <h4 class="inline">Country:</h4>
    <a href="/country/us">USA</a> | <a href="/country/au">Australia</a>
  </div>
  <div class="txt-block">
    <h4 class="inline">Language:</h4>
    <a href="/language/en">English</a>
  </div>
  <div class="txt-block">
    <h4 class="inline">Release Date:</h4> 31 March 1999 (USA)
    <span class="see-more inline"><a href="releaseinfo">See more</a></span>
  </div>
  <div class="txt-block">
    <h4 class="inline">Budget:</h4> $63,000,000
    <span class="attribute">(estimated)</span>
  </div>
  <div class="txt-block">
    <h4 class="inline">Runtime:</h4>
    <time itemprop="duration" datetime="PT136M">136 min</time>
  </div>
  <div class="txt-block">
    <h4 class="inline">Aspect Ratio:</h4> 2.35 : 1
  </div>
</div>
</body>
</html>
"#;

/// The same title in the later `title_wrapper` layout.
pub const MATRIX_TITLE_WRAPPER: &str = r#"<!DOCTYPE html>
<html>
<head><link rel="canonical" href="http://example.com/title/tt0133093/"></head>
<body>
<div class="title-overview">
  <div class="poster"><a href="/title/tt0133093/mediaviewer"><img src="http://ia.example.com/matrix-2017.jpg"></a></div>
  <div class="title_wrapper">
    <h1 itemprop="name" class="">The Matrix&nbsp;<span id="titleYear">(<a href="/year/1999/">1999</a>)</span></h1>
    <div class="subtext">
      R | <time itemprop="duration">2h 16min</time> |
      <a href="/genre/Action?ref_=tt_ov_inf">Action</a>,
      <a href="/genre/Sci-Fi?ref_=tt_ov_inf">Sci-Fi</a> |
      <a href="/title/tt0133093/releaseinfo" title="See more release dates">31 March 1999 (USA)</a>
    </div>
  </div>
  <div class="ratingValue"><span itemprop="ratingValue">8.7</span>/10 <span itemprop="ratingCount">1,677,000</span></div>
  <div class="plot_summary">
    <div class="credit_summary_item"><h4 class="inline">Directors:</h4> <a href="/name/nm0905154/">Lana Wachowski</a>, <a href="/name/nm0905152/">Lilly Wachowski</a></div>
    <div class="credit_summary_item"><h4 class="inline">Stars:</h4> <a href="/name/nm0000206/">Keanu Reeves</a></div>
  </div>
</div>
<div class="article" id="titleCast">
  <h2>Cast</h2>
  <table class="cast_list">
    <tr><td colspan="4" class="castlist_label">Cast overview:</td></tr>
    <tr class="odd">
      <td class="primary_photo"><a href="/name/nm0000206/"><img loadlate="http://ia.example.com/keanu-2017.jpg"></a></td>
      <td><a href="/name/nm0000206/"> Keanu Reeves
</a></td>
      <td class="ellipsis">...</td>
      <td class="character">
        <a href="/title/tt0133093/characters/nm0000206">Neo</a>
      </td>
    </tr>
  </table>
</div>
<div class="article" id="titleStoryLine">
  <h2>Storyline</h2>
  <div class="inline canwrap">
    <p>
      <span>Thomas A. Anderson is a man living two lives.</span>
    </p>
  </div>
</div>
<div class="article" id="titleDetails">
  <h2>Details</h2>
  <div class="txt-block"><h4 class="inline">Country:</h4> <a href="/country/us">USA</a></div>
  <div class="txt-block"><h4 class="inline">Budget:</h4>$63,000,000 <span class="attribute">(estimated)</span></div>
</div>
</body>
</html>
"#;

/// Search page that jumped straight to a title: its canonical link is a title URL.
pub const SEARCH_REDIRECTED: &str = r#"<html><head>
<link rel="canonical" href="http://example.com/title/tt0133093/">
</head><body><h1 class="header"><span>The Matrix</span></h1></body></html>"#;

/// Old-style search result list.
pub const SEARCH_RESULTS: &str = r#"<html><head>
<link rel="canonical" href="http://example.com/find">
</head><body>
<p><b>Popular Titles</b></p>
<p style="margin:0 0 0.5em 0;"><b><a href="/title/tt0064505/">The Italian Job</a></b> (1969)</p>
<p style="margin:0 0 0.5em 0;"><b><a href="/title/tt0317740/">The Italian Job</a></b> (2003)</p>
</body></html>"#;

/// Newer search result list.
pub const SEARCH_RESULTS_TABLE: &str = r#"<html><head></head><body>
<table class="findList">
  <tr class="findResult odd"><td class="result_text"> <a href="/title/tt1130884/?ref_=fn_al_tt_1">Shutter Island</a> (2010) </td></tr>
  <tr class="findResult even"><td class="result_text"> <a href="/title/tt0000001/?ref_=fn_al_tt_2">Shutter Island: Behind the Story</a> </td></tr>
</table>
</body></html>"#;

/// Search page with nothing on it.
pub const SEARCH_EMPTY: &str = r#"<html><head><title>Find - IMDb</title></head>
<body><p>No results found for "zzqqxx"</p></body></html>"#;
